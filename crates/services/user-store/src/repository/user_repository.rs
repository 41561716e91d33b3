//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Iterable, QueryFilter};

use super::entities::user::{ActiveModel, Column as UserColumn, Entity as UserEntity};
use crate::infra::Persistence;
use crate::with_transaction;
use common::{AppError, AppResult};
use domain::{normalize_email, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Emails are matched case-insensitively: every lookup lower-cases its input
/// and stored emails are always lower-case.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by primary key
    async fn get_by_id(&self, id: i64) -> AppResult<User>;

    /// Find user by email address
    async fn get_by_email(&self, email: &str) -> AppResult<User>;

    /// Check whether a user other than `exclude_id` owns the email
    async fn exists(&self, exclude_id: i64, email: &str) -> AppResult<bool>;

    /// Insert a new user, filling in its id and derived fields
    async fn create(&self, user: &mut User) -> AppResult<()>;

    /// Overwrite every mutable column of the user's row
    async fn update(&self, user: &mut User) -> AppResult<()>;

    /// Overwrite only the given columns of the user's row
    async fn update_cols(&self, user: &mut User, columns: &[UserColumn]) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
    uow: Persistence,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        let uow = Persistence::new(db.clone());
        Self { db, uow }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::user_not_exist_id(id))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        if email.is_empty() {
            return Err(AppError::user_not_exist_email(email));
        }

        let email = normalize_email(email);
        let result = UserEntity::find()
            .filter(UserColumn::Email.eq(email.as_str()))
            .one(&self.db)
            .await?;

        result
            .map(User::from)
            .ok_or_else(|| AppError::user_not_exist_email(email))
    }

    async fn exists(&self, exclude_id: i64, email: &str) -> AppResult<bool> {
        if email.is_empty() {
            return Ok(false);
        }

        let result = UserEntity::find()
            .filter(UserColumn::Id.ne(exclude_id))
            .filter(UserColumn::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await?;

        Ok(result.is_some())
    }

    async fn create(&self, user: &mut User) -> AppResult<()> {
        user.validate_for_create()?;
        user.normalize_email();

        let mut candidate = user.clone();
        let created = with_transaction!(self.uow, |ctx| {
            let users = ctx.users();
            if users.find_by_email(&candidate.email).await?.is_some() {
                return Err(AppError::email_already_used(candidate.email));
            }

            candidate.prepare_for_insert(Utc::now());
            users.insert(&candidate).await
        })?;

        *user = created;
        Ok(())
    }

    async fn update(&self, user: &mut User) -> AppResult<()> {
        let columns: Vec<UserColumn> = UserColumn::iter().collect();
        self.update_cols(user, &columns).await
    }

    async fn update_cols(&self, user: &mut User, columns: &[UserColumn]) -> AppResult<()> {
        user.prepare_for_update(Utc::now());

        // Zero affected rows is not an error
        UserEntity::update_many()
            .set(ActiveModel::for_update(user, columns))
            .filter(UserColumn::Id.eq(user.id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
