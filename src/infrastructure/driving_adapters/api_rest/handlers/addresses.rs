//! Address Handlers
//!
//! HTTP handlers for the address book.
//! All endpoints require JWT authentication.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::address::AddressId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    AddressBookResponseDto, AddressDto, AddressResponseDto, AddressTitleDto, MessageResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for address endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addresses", get(list_addresses).post(create_address))
        .route("/addresses/{id}", put(update_address).delete(delete_address))
        .route("/addresses/{id}/title", put(update_title))
        .route("/addresses/{id}/status", put(set_default))
}

/// GET /addresses - The caller's live addresses
///
/// # Responses
///
/// * 200 OK - Address book, most recently updated first
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn list_addresses(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<AddressBookResponseDto>, ApiError> {
    let book = state.list_addresses_use_case.execute(auth.id).await?;
    Ok(Json(AddressBookResponseDto::from(book)))
}

/// POST /addresses - Add an address
///
/// # Responses
///
/// * 201 Created - Address created
/// * 400 Bad Request - Validation error, inconsistent areas or address limit reached
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn create_address(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<AddressDto>,
) -> Result<(StatusCode, Json<AddressResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let address = state.create_address_use_case.execute(auth.id, dto.into()).await?;

    Ok((StatusCode::CREATED, Json(AddressResponseDto::from(address))))
}

/// PUT /addresses/{id} - Replace an address
///
/// # Responses
///
/// * 200 OK - Address updated
/// * 400 Bad Request - Validation error or inconsistent areas
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - No such address for this user
#[axum::debug_handler]
async fn update_address(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<AddressDto>,
) -> Result<Json<AddressResponseDto>, ApiError> {
    dto.validate()?;

    let address = state
        .update_address_use_case
        .execute(auth.id, AddressId::new(id), dto.into())
        .await?;

    Ok(Json(AddressResponseDto::from(address)))
}

/// DELETE /addresses/{id} - Soft delete an address
///
/// # Responses
///
/// * 204 No Content - Address deleted
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - No such address for this user
#[axum::debug_handler]
async fn delete_address(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_address_use_case.execute(auth.id, AddressId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /addresses/{id}/title - Rename an address
#[axum::debug_handler]
async fn update_title(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<AddressTitleDto>,
) -> Result<Json<AddressTitleDto>, ApiError> {
    dto.validate()?;

    let title = state
        .update_address_title_use_case
        .execute(auth.id, AddressId::new(id), dto.title)
        .await?;

    Ok(Json(AddressTitleDto { title }))
}

/// PUT /addresses/{id}/status - Make an address the default
#[axum::debug_handler]
async fn set_default(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponseDto>, ApiError> {
    state
        .set_default_address_use_case
        .execute(auth.id, AddressId::new(id))
        .await?;
    Ok(Json(MessageResponseDto::ok()))
}
