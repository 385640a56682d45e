//! User Domain Model
//!
//! Represents a registered mall customer.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use super::address::AddressId;

lazy_static! {
    /// Mainland China mobile numbers
    static ref MOBILE_REGEX: Regex = Regex::new(r"^1[3-9]\d{9}$").expect("valid regex");
}

/// Returns true when `value` looks like a mobile number
#[must_use]
pub fn is_mobile(value: &str) -> bool {
    MOBILE_REGEX.is_match(value)
}

/// Newtype wrapper for User ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Create a UserId from a raw database id
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer id
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl TryFrom<&str> for UserId {
    type Error = std::num::ParseIntError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(value.parse()?))
    }
}

/// Data required to persist a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub mobile: String,
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: String,
    password_hash: String,
    mobile: String,
    email: Option<String>,
    email_active: bool,
    default_address_id: Option<AddressId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Restore a User from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        username: String,
        password_hash: String,
        mobile: String,
        email: Option<String>,
        email_active: bool,
        default_address_id: Option<AddressId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            mobile,
            email,
            email_active,
            default_address_id,
            created_at,
            updated_at,
        }
    }

    /// Replace the e-mail address; a new address always starts unverified
    #[must_use]
    pub fn with_email(self, email: String) -> Self {
        Self {
            email: Some(email),
            email_active: false,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Mark the current e-mail as verified
    #[must_use]
    pub fn activate_email(self) -> Self {
        Self {
            email_active: true,
            updated_at: Utc::now(),
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn email_active(&self) -> bool {
        self.email_active
    }

    #[must_use]
    pub fn default_address_id(&self) -> Option<AddressId> {
        self.default_address_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        let now = Utc::now();
        User::restore(
            UserId::new(7),
            "alice01".to_string(),
            "hash".to_string(),
            "13800138000".to_string(),
            None,
            false,
            None,
            now,
            now,
        )
    }

    #[test]
    fn test_is_mobile() {
        assert!(is_mobile("13800138000"));
        assert!(is_mobile("19912345678"));
        assert!(!is_mobile("12800138000"));
        assert!(!is_mobile("1380013800"));
        assert!(!is_mobile("alice01"));
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!(UserId::try_from("42").unwrap(), UserId::new(42));
        assert!(UserId::try_from("abc").is_err());
    }

    #[test]
    fn test_with_email_resets_activation() {
        let verified = user().with_email("a@example.com".into()).activate_email();
        assert!(verified.email_active());

        let changed = verified.with_email("b@example.com".into());
        assert_eq!(changed.email(), Some("b@example.com"));
        assert!(!changed.email_active());
    }
}
