//! JWT Authentication Middleware
//!
//! Extracts and validates JWT tokens from requests.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, DecodingKey};

use crate::domain::models::user::UserId;
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driven_adapters::jwt::{validation, Claims};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ErrorDetail, ErrorResponse};

use super::request_id::RequestId;

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = std::num::ParseIntError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::try_from(claims.sub.as_str())?,
            username: claims.username,
        })
    }
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

/// Error type for authentication failures
pub struct AuthError {
    message: String,
    request_id: Option<String>,
}

impl AuthError {
    fn new(request_id: Option<&str>, message: &str) -> Self {
        Self {
            message: message.to_string(),
            request_id: request_id.map(str::to_string),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "UNAUTHORIZED".to_string(),
                message: self.message,
                details: None,
            },
            request_id: self.request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts.extensions.get::<RequestId>().map(RequestId::to_string);
        let request_id = request_id.as_deref();

        // Get config from request extensions
        let config = parts
            .extensions
            .get::<Arc<AppConfig>>()
            .cloned()
            .ok_or_else(|| AuthError::new(request_id, "Configuration not available"))?;

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AuthError::new(request_id, "Missing Authorization header"))?
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::new(request_id, "Invalid Authorization header format"))?;

        // Explicit algorithm and mandatory expiry, see `jwt::validation`
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt.secret.as_bytes()),
            &validation(),
        )
        .map_err(|_| AuthError::new(request_id, "Invalid or expired token"))?;

        let user = AuthenticatedUser::try_from(token_data.claims)
            .map_err(|_| AuthError::new(request_id, "Invalid or expired token"))?;

        Ok(JwtAuth(user))
    }
}

/// Middleware layer that adds config to request extensions for JWT validation
pub async fn add_config_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.config.clone());
    next.run(request).await
}
