//! QQ Login Handlers

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::application::use_cases::oauth::{BindQqData, QqLoginOutcome};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    BindQqDto, LoginResponseDto, QqBindRequiredDto, QqCallbackQuery, QqLoginUrlQuery, QqLoginUrlResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

use super::merge_cart_cookie;

/// Create the router for QQ login endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/qq/login/url", get(get_login_url))
        .route("/qq/login", get(qq_callback).post(bind_qq_user))
}

/// GET /qq/login/url?next= - URL of the QQ authorization page
#[axum::debug_handler]
async fn get_login_url(
    State(state): State<AppState>,
    Query(query): Query<QqLoginUrlQuery>,
) -> Json<QqLoginUrlResponseDto> {
    let login_url = state.get_qq_login_url_use_case.execute(query.next.as_deref());
    Json(QqLoginUrlResponseDto { login_url })
}

/// GET /qq/login?code= - QQ redirect target
///
/// # Responses
///
/// * 200 OK - Either a login token (account bound) or a bind token
/// * 400 Bad Request - Missing code
/// * 502 Bad Gateway - QQ rejected the code or could not be reached
#[axum::debug_handler]
async fn qq_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<QqCallbackQuery>,
) -> Result<Response, ApiError> {
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("code is required".to_string()))?;

    match state.qq_login_use_case.execute(&code).await? {
        QqLoginOutcome::LoggedIn(result) => {
            let jar = merge_cart_cookie(&state, jar, result.user.id()).await;
            Ok((jar, Json(LoginResponseDto::from(result))).into_response())
        }
        QqLoginOutcome::BindRequired { access_token } => Ok(Json(QqBindRequiredDto { access_token }).into_response()),
    }
}

/// POST /qq/login - Bind the QQ account to a user and log in
///
/// # Responses
///
/// * 200 OK - Bound and logged in
/// * 400 Bad Request - Validation error, bad bind token, wrong SMS code or password
/// * 409 Conflict - This QQ account is already bound
#[axum::debug_handler]
async fn bind_qq_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<BindQqDto>,
) -> Result<(CookieJar, Json<LoginResponseDto>), ApiError> {
    dto.validate()?;

    let result = state.bind_qq_user_use_case.execute(BindQqData::from(&dto)).await?;
    let jar = merge_cart_cookie(&state, jar, result.user.id()).await;

    Ok((jar, Json(LoginResponseDto::from(result))))
}
