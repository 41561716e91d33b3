//! User service - account workflows that touch a single column set.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use common::{AppError, AppResult};
use domain::{normalize_email, User};

use crate::repository::{UserColumn, UserRepository};

/// Account workflows over any `UserRepository`.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Move the user to a new primary email.
    ///
    /// The user's own row is excluded from the collision check, so re-saving
    /// the current address in another case succeeds.
    pub async fn change_email(&self, user: &mut User, new_email: &str) -> AppResult<()> {
        if new_email.trim().is_empty() {
            return Err(AppError::validation("email is required"));
        }
        if self.repo.exists(user.id, new_email).await? {
            return Err(AppError::email_already_used(normalize_email(new_email)));
        }

        user.email = new_email.to_string();
        self.repo.update_cols(user, &[UserColumn::Email]).await
    }

    /// Mark the primary email as verified
    pub async fn activate(&self, user: &mut User) -> AppResult<()> {
        user.is_active = true;
        self.repo.update_cols(user, &[UserColumn::IsActive]).await
    }

    /// Stamp a successful login
    pub async fn record_login(&self, user: &mut User, now: DateTime<Utc>) -> AppResult<()> {
        user.last_login = now;
        self.repo.update_cols(user, &[UserColumn::LastLogin]).await
    }
}
