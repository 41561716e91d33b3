//! Unified error handling for user store callers.
//!
//! `UserNotExist` maps to a "not found" response, `EmailAlreadyUsed` to a
//! "conflict" response and everything raised by the engine to a generic failure.

use domain::{DomainError, UserKey};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("user does not exist [{0}]")]
    UserNotExist(UserKey),

    #[error("email already used [email: {0}]")]
    EmailAlreadyUsed(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UserNotExist(_) => "NOT_FOUND",
            AppError::EmailAlreadyUsed(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Lookup found no matching user
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::UserNotExist(_))
    }

    /// Write would violate email uniqueness
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::EmailAlreadyUsed(_))
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotExist(key) => AppError::UserNotExist(key),
            DomainError::EmailAlreadyUsed(email) => AppError::EmailAlreadyUsed(email),
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn user_not_exist_id(id: i64) -> Self {
        AppError::UserNotExist(UserKey::Id(id))
    }

    pub fn user_not_exist_email(email: impl Into<String>) -> Self {
        AppError::UserNotExist(UserKey::Email(email.into()))
    }

    pub fn email_already_used(email: impl Into<String>) -> Self {
        AppError::EmailAlreadyUsed(email.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::user_not_exist_id(3).into();
        assert!(err.is_not_found());
        assert_eq!(err.code(), "NOT_FOUND");

        let err: AppError = DomainError::email_already_used("a@x.com").into();
        assert!(err.is_conflict());
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(err.user_message(), "email already used [email: a@x.com]");
    }

    #[test]
    fn test_internal_message_hidden() {
        let err = AppError::internal("pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
