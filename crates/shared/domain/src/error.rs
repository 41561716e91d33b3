//! Domain-level errors.
//!
//! These errors represent business rule violations on user records.
//! They are independent of the storage engine.

use std::fmt;

use thiserror::Error;

/// Key a user lookup was performed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    Id(i64),
    Email(String),
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::Id(id) => write!(f, "uid: {}", id),
            UserKey::Email(email) => write!(f, "email: {}", email),
        }
    }
}

/// Domain-specific errors for user records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No user matched the lookup key
    #[error("user does not exist [{0}]")]
    UserNotExist(UserKey),

    /// Another user already owns the email address
    #[error("email already used [email: {0}]")]
    EmailAlreadyUsed(String),

    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a not-exist error for an ID lookup
    pub fn user_not_exist_id(id: i64) -> Self {
        DomainError::UserNotExist(UserKey::Id(id))
    }

    /// Create a not-exist error for an email lookup
    pub fn user_not_exist_email(email: impl Into<String>) -> Self {
        DomainError::UserNotExist(UserKey::Email(email.into()))
    }

    /// Create an email conflict error
    pub fn email_already_used(email: impl Into<String>) -> Self {
        DomainError::EmailAlreadyUsed(email.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_exist_messages() {
        assert_eq!(
            DomainError::user_not_exist_id(7).to_string(),
            "user does not exist [uid: 7]"
        );
        assert_eq!(
            DomainError::user_not_exist_email("a@x.com").to_string(),
            "user does not exist [email: a@x.com]"
        );
    }

    #[test]
    fn test_email_already_used_message() {
        let err = DomainError::email_already_used("dup@x.com");
        assert_eq!(err.to_string(), "email already used [email: dup@x.com]");
    }
}
