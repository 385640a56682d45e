//! Address Domain Model
//!
//! Shipping addresses kept in a user's address book. Addresses are never
//! physically removed; deletion only flags them.

use chrono::{DateTime, Utc};

use super::area::AreaRef;
use super::user::UserId;

/// Maximum number of live addresses per user
pub const ADDRESS_LIMIT: usize = 20;

/// Newtype wrapper for Address ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressId(i64);

impl AddressId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AddressId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Editable address fields, used for both creation and full update
#[derive(Debug, Clone)]
pub struct AddressData {
    pub title: Option<String>,
    pub receiver: String,
    pub province_id: i64,
    pub city_id: i64,
    pub district_id: i64,
    pub place: String,
    pub mobile: String,
    pub tel: Option<String>,
    pub email: Option<String>,
}

impl AddressData {
    /// Title to store: falls back to the receiver's name when none was given
    #[must_use]
    pub fn effective_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.receiver.clone(),
        }
    }
}

/// Address domain entity with resolved area names
#[derive(Debug, Clone)]
pub struct Address {
    id: AddressId,
    user_id: UserId,
    title: String,
    receiver: String,
    province: AreaRef,
    city: AreaRef,
    district: AreaRef,
    place: String,
    mobile: String,
    tel: Option<String>,
    email: Option<String>,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Address {
    /// Restore an Address from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: AddressId,
        user_id: UserId,
        title: String,
        receiver: String,
        province: AreaRef,
        city: AreaRef,
        district: AreaRef,
        place: String,
        mobile: String,
        tel: Option<String>,
        email: Option<String>,
        is_deleted: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            receiver,
            province,
            city,
            district,
            place,
            mobile,
            tel,
            email,
            is_deleted,
            created_at,
            updated_at,
        }
    }

    /// An address is visible to `user_id` only if it is theirs and not deleted
    #[must_use]
    pub fn is_visible_to(&self, user_id: UserId) -> bool {
        self.user_id == user_id && !self.is_deleted
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> AddressId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    #[must_use]
    pub fn province(&self) -> &AreaRef {
        &self.province
    }

    #[must_use]
    pub fn city(&self) -> &AreaRef {
        &self.city
    }

    #[must_use]
    pub fn district(&self) -> &AreaRef {
        &self.district
    }

    #[must_use]
    pub fn place(&self) -> &str {
        &self.place
    }

    #[must_use]
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    #[must_use]
    pub fn tel(&self) -> Option<&str> {
        self.tel.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
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
