//! QQ OAuth binding model
//!
//! Links a QQ openid to a local user account.

use chrono::{DateTime, Utc};

use super::user::UserId;

/// Default redirect target after QQ login when the client gives none
pub const DEFAULT_LOGIN_STATE: &str = "/";

/// A persisted QQ binding
#[derive(Debug, Clone)]
pub struct QqBinding {
    pub id: i64,
    pub user_id: UserId,
    pub openid: String,
    pub created_at: DateTime<Utc>,
}

/// Access token returned by the provider after exchanging an authorization code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QqAccessToken(pub String);
