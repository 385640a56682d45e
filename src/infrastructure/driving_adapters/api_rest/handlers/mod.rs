//! HTTP Handlers
//!
//! One router per resource; `api_rest::router` merges them.

pub mod addresses;
pub mod areas;
pub mod histories;
pub mod oauth;
pub mod payments;
pub mod users;

use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::domain::models::user::UserId;
use crate::infrastructure::driving_adapters::api_rest::dto::{decode_cart_cookie, CART_COOKIE};
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Merge the guest cart cookie into the user's stored cart after a login.
///
/// Never fails the login: an undecodable cookie is dropped, and a store
/// failure keeps the cookie so the next login can retry.
pub(crate) async fn merge_cart_cookie(state: &AppState, jar: CookieJar, user_id: UserId) -> CookieJar {
    let Some(cookie) = jar.get(CART_COOKIE) else {
        return jar;
    };

    let items = match decode_cart_cookie(cookie.value()) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(user_id = %user_id, error = %e, "Discarding unreadable cart cookie");
            return jar.remove(Cookie::build(CART_COOKIE).path("/"));
        }
    };

    match state.merge_cart_use_case.execute(user_id, items).await {
        Ok(merged) => {
            tracing::debug!(user_id = %user_id, merged, "Merged cart cookie");
            jar.remove(Cookie::build(CART_COOKIE).path("/"))
        }
        Err(e) => {
            tracing::warn!(user_id = %user_id, error = %e, "Cart merge failed, keeping cookie");
            jar
        }
    }
}
