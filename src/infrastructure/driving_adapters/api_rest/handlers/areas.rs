//! Area Handlers
//!
//! Public lookups for the province / city / district pickers.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::{AreaDetailResponseDto, AreaResponseDto};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for area endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/areas", get(list_provinces))
        .route("/areas/{id}", get(get_area))
}

/// GET /areas - All provinces
#[axum::debug_handler]
async fn list_provinces(State(state): State<AppState>) -> Result<Json<Vec<AreaResponseDto>>, ApiError> {
    let provinces = state.list_provinces_use_case.execute().await?;
    Ok(Json(provinces.into_iter().map(AreaResponseDto::from).collect()))
}

/// GET /areas/{id} - An area and its direct children
///
/// # Responses
///
/// * 200 OK - Area with `subs`
/// * 404 Not Found - Unknown area id
#[axum::debug_handler]
async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AreaDetailResponseDto>, ApiError> {
    let area = state.get_area_use_case.execute(id).await?;
    Ok(Json(AreaDetailResponseDto::from(area)))
}
