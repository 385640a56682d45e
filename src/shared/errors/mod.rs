//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Address limit of {0} reached")]
    AddressLimitReached(usize),

    #[error("Invalid area hierarchy: {0}")]
    InvalidAreaHierarchy(String),

    #[error("Order {0} is not awaiting payment")]
    OrderNotPayable(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Errors raised by outbound services (OAuth provider, token signing, notifier, file output)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    /// Turn a unique-constraint violation into [`RepositoryError::Duplicate`]
    #[must_use]
    pub fn unique_violation(err: sqlx::Error, what: impl Into<String>) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate(what.into()),
            _ => Self::Database(err),
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Too many requests: {0}")]
    TooManyRequests(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl UseCaseError {
    /// Shorthand for a single validation message
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }

    /// Shorthand for a missing resource
    #[must_use]
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Domain(DomainError::AddressLimitReached(_) | DomainError::InvalidAreaHierarchy(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Domain(DomainError::OrderNotPayable(_)) | Self::Repository(RepositoryError::Duplicate(_)) => {
                StatusCode::CONFLICT
            }
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Service(ServiceError::Http(_) | ServiceError::Provider(_)) => StatusCode::BAD_GATEWAY,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::TooManyRequests(_) => "TOO_MANY_REQUESTS",
            Self::Domain(DomainError::AddressLimitReached(_)) => "ADDRESS_LIMIT",
            Self::Domain(DomainError::InvalidAreaHierarchy(_)) => "INVALID_AREA",
            Self::Domain(DomainError::OrderNotPayable(_)) => "ORDER_NOT_PAYABLE",
            Self::Repository(RepositoryError::Duplicate(_)) => "CONFLICT",
            Self::Repository(_) => "INTERNAL_ERROR",
            Self::Service(ServiceError::Http(_) | ServiceError::Provider(_)) => "UPSTREAM_ERROR",
            Self::Service(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to expose to clients
    fn public_message(&self) -> String {
        match self {
            Self::Repository(_) | Self::Service(_) if self.status_code().is_server_error() => {
                if self.status_code() == StatusCode::BAD_GATEWAY {
                    "Upstream service unavailable".to_string()
                } else {
                    "An unexpected error occurred".to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Split a `field: message` string produced by the validator conversion
    fn from_message(message: &str) -> Self {
        match message.split_once(": ") {
            Some((field, msg)) if !field.contains(' ') => Self {
                field: field.to_string(),
                message: msg.to_string(),
            },
            _ => Self {
                field: String::new(),
                message: message.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(errors.iter().map(|e| FieldError::from_message(e)).collect())
                } else {
                    None
                };
                if uc_error.status_code().is_server_error() {
                    tracing::error!(error = %uc_error, "Request failed");
                }
                (
                    uc_error.status_code(),
                    uc_error.error_code().to_string(),
                    uc_error.public_message(),
                    details,
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED".to_string(),
                "Unauthorized".to_string(),
                None,
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message, details },
            request_id: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = UseCaseError::invalid("mobile: invalid mobile number");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn provider_errors_map_to_bad_gateway() {
        let err = UseCaseError::from(ServiceError::Provider("qq returned an error".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.public_message(), "Upstream service unavailable");
    }

    #[test]
    fn repository_errors_hide_details() {
        let err = UseCaseError::from(RepositoryError::Mapping("bad column".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "An unexpected error occurred");
    }

    #[test]
    fn duplicate_rows_map_to_conflict() {
        let err = UseCaseError::from(RepositoryError::Duplicate("openid ABC".into()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[test]
    fn unique_violation_keeps_other_database_errors() {
        let err = RepositoryError::unique_violation(sqlx::Error::RowNotFound, "user alice01");
        assert!(matches!(err, RepositoryError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn domain_errors_have_specific_codes() {
        let err = UseCaseError::from(DomainError::OrderNotPayable("2024".into()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "ORDER_NOT_PAYABLE");
    }

    #[test]
    fn field_error_splits_field_prefix() {
        let fe = FieldError::from_message("mobile: invalid mobile number");
        assert_eq!(fe.field, "mobile");
        assert_eq!(fe.message, "invalid mobile number");

        let fe = FieldError::from_message("SMS code is wrong");
        assert_eq!(fe.field, "");
    }
}
