//! User domain entity and its normalization rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::avatar::hash_email;
use crate::error::{DomainError, DomainResult};

/// Lower-case an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// User domain entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on insert, immutable afterwards
    pub id: i64,
    #[serde(rename = "fullname", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Primary email address, always stored lower-cased
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Whether the primary email has been activated
    pub is_active: bool,
    /// Derived from `avatar_email`, never set by callers
    pub avatar: String,
    pub avatar_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "lastlogin")]
    pub last_login: DateTime<Utc>,
}

impl User {
    /// Create an unsaved user with the given email
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set the display name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Check the fields a new record must carry
    pub fn validate_for_create(&self) -> DomainResult<()> {
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("email is required"));
        }
        Ok(())
    }

    /// Lower-case the primary email in place
    pub fn normalize_email(&mut self) {
        self.email = normalize_email(&self.email);
    }

    /// Derive the fields filled in when a record is first written.
    ///
    /// Expects `email` to be normalized already. `last_login` is stamped with
    /// the creation time as well.
    pub fn prepare_for_insert(&mut self, now: DateTime<Utc>) {
        self.avatar_email = self.email.clone();
        self.avatar = hash_email(&self.avatar_email);
        self.created_at = now;
        self.updated_at = now;
        self.last_login = now;
    }

    /// Normalize fields before an update is written.
    pub fn prepare_for_update(&mut self, now: DateTime<Utc>) {
        self.normalize_email();
        if self.avatar_email.is_empty() {
            self.avatar_email = self.email.clone();
        }
        if !self.avatar_email.is_empty() {
            self.avatar = hash_email(&self.avatar_email);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_prepare_for_insert_derives_avatar() {
        let mut user = User::new("Foo@Bar.com");
        user.normalize_email();
        user.prepare_for_insert(fixed_now());

        assert_eq!(user.email, "foo@bar.com");
        assert_eq!(user.avatar_email, "foo@bar.com");
        assert_eq!(user.avatar, hash_email("foo@bar.com"));
        assert_eq!(user.created_at, fixed_now());
        assert_eq!(user.updated_at, fixed_now());
        assert_eq!(user.last_login, fixed_now());
    }

    #[test]
    fn test_prepare_for_update_fills_empty_avatar_email() {
        let mut user = User {
            id: 5,
            email: "New@X.com".to_string(),
            ..Default::default()
        };
        user.prepare_for_update(fixed_now());

        assert_eq!(user.email, "new@x.com");
        assert_eq!(user.avatar_email, "new@x.com");
        assert_eq!(user.avatar, hash_email("new@x.com"));
        assert_eq!(user.updated_at, fixed_now());
    }

    #[test]
    fn test_prepare_for_update_keeps_explicit_avatar_email() {
        let mut user = User {
            id: 5,
            email: "main@x.com".to_string(),
            avatar_email: "Pic@Y.org".to_string(),
            avatar: "stale".to_string(),
            ..Default::default()
        };
        user.prepare_for_update(fixed_now());

        assert_eq!(user.avatar_email, "Pic@Y.org");
        assert_eq!(user.avatar, hash_email("pic@y.org"));
    }

    #[test]
    fn test_prepare_for_update_does_not_touch_created_at() {
        let mut user = User::new("a@x.com");
        user.prepare_for_update(fixed_now());
        assert_eq!(user.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn test_validate_for_create() {
        assert!(User::new("a@x.com").validate_for_create().is_ok());
        assert!(matches!(
            User::new("   ").validate_for_create(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_serialized_field_names() {
        let user = User::new("a@x.com").with_full_name("Ann");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["fullname"], "Ann");
        assert!(json.get("lastlogin").is_some());
        assert!(json.get("location").is_none());
    }
}
