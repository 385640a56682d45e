//! Payment Handlers
//!
//! Records the gateway's trade number once the buyer has paid.
//! All endpoints require JWT authentication.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::{
    PaymentResponseDto, RecordPaymentDto, TradeIdResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for payment endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/orders/{order_id}/payment", get(get_payment).post(record_payment))
}

/// POST /orders/{order_id}/payment - Record a payment
///
/// # Responses
///
/// * 201 Created - Payment stored, order awaiting shipment
/// * 400 Bad Request - Missing trade number
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - No such order for this user
/// * 409 Conflict - Order is not awaiting payment
#[axum::debug_handler]
async fn record_payment(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(dto): Json<RecordPaymentDto>,
) -> Result<(StatusCode, Json<TradeIdResponseDto>), ApiError> {
    dto.validate()?;

    let payment = state
        .record_payment_use_case
        .execute(auth.id, &order_id, &dto.trade_no)
        .await?;

    Ok((StatusCode::CREATED, Json(TradeIdResponseDto::from(payment))))
}

/// GET /orders/{order_id}/payment - Payment recorded for an order
///
/// # Responses
///
/// * 200 OK - Payment
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - No such order, or not paid yet
#[axum::debug_handler]
async fn get_payment(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<PaymentResponseDto>, ApiError> {
    let payment = state.get_payment_use_case.execute(auth.id, &order_id).await?;
    Ok(Json(PaymentResponseDto::from(payment)))
}
