//! Browse History Handlers

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::{BrowseHistoryDto, HistorySkuResponseDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for browse history endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/browse_histories", get(list_history).post(add_history))
}

/// POST /browse_histories - Record a product view
///
/// # Responses
///
/// * 201 Created - View recorded
/// * 400 Bad Request - Unknown or unlaunched SKU
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn add_history(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<BrowseHistoryDto>,
) -> Result<(StatusCode, Json<BrowseHistoryDto>), ApiError> {
    dto.validate()?;

    let sku_id = state.add_browse_history_use_case.execute(auth.id, dto.sku_id).await?;
    Ok((StatusCode::CREATED, Json(BrowseHistoryDto { sku_id })))
}

/// GET /browse_histories - Recently viewed SKUs, newest first
#[axum::debug_handler]
async fn list_history(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<HistorySkuResponseDto>>, ApiError> {
    let skus = state.list_browse_history_use_case.execute(auth.id).await?;
    Ok(Json(skus.into_iter().map(HistorySkuResponseDto::from).collect()))
}
