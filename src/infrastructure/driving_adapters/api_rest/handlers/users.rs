//! User Handlers
//!
//! Registration helpers, login, profile and e-mail verification.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::application::use_cases::users::RegisterUserData;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    EmailResponseDto, LoginDto, LoginResponseDto, MessageResponseDto, MobileCountResponseDto, RegisterResponseDto,
    RegisterUserDto, UpdateEmailDto, UserProfileResponseDto, UsernameCountResponseDto, VerifyEmailQuery,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

use super::merge_cart_cookie;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/usernames/{username}/count", get(count_username))
        .route("/mobiles/{mobile}/count", get(count_mobile))
        .route("/sms_codes/{mobile}", get(send_sms_code))
        .route("/users", post(register_user))
        .route("/authorizations", post(login))
        .route("/user", get(get_profile))
        .route("/email", put(update_email))
        .route("/emails/verification", get(verify_email))
}

/// GET /usernames/{username}/count - How many users have this username
#[axum::debug_handler]
async fn count_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UsernameCountResponseDto>, ApiError> {
    let count = state.count_username_use_case.execute(&username).await?;
    Ok(Json(UsernameCountResponseDto { username, count }))
}

/// GET /mobiles/{mobile}/count - How many users have this mobile
#[axum::debug_handler]
async fn count_mobile(
    State(state): State<AppState>,
    Path(mobile): Path<String>,
) -> Result<Json<MobileCountResponseDto>, ApiError> {
    let count = state.count_mobile_use_case.execute(&mobile).await?;
    Ok(Json(MobileCountResponseDto { mobile, count }))
}

/// GET /sms_codes/{mobile} - Send a verification code
///
/// # Responses
///
/// * 200 OK - Code sent
/// * 400 Bad Request - Not a mobile number
/// * 429 Too Many Requests - A code was sent less than a minute ago
#[axum::debug_handler]
async fn send_sms_code(
    State(state): State<AppState>,
    Path(mobile): Path<String>,
) -> Result<Json<MessageResponseDto>, ApiError> {
    state.send_sms_code_use_case.execute(&mobile).await?;
    Ok(Json(MessageResponseDto::ok()))
}

/// POST /users - Register a new user
///
/// # Responses
///
/// * 201 Created - User created and logged in
/// * 400 Bad Request - Validation error or wrong SMS code
/// * 409 Conflict - Username or mobile already registered
#[axum::debug_handler]
async fn register_user(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<(StatusCode, Json<RegisterResponseDto>), ApiError> {
    // Validate DTO
    dto.validate()?;

    let result = state
        .register_user_use_case
        .execute(RegisterUserData::from(&dto))
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponseDto::from(result))))
}

/// POST /authorizations - Log in with username or mobile
///
/// Merges the guest cart cookie into the user's cart and clears it.
///
/// # Responses
///
/// * 200 OK - Token issued
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Wrong credentials
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<LoginDto>,
) -> Result<(CookieJar, Json<LoginResponseDto>), ApiError> {
    dto.validate()?;

    let result = state.login_use_case.execute(&dto.username, &dto.password).await?;
    let jar = merge_cart_cookie(&state, jar, result.user.id()).await;

    Ok((jar, Json(LoginResponseDto::from(result))))
}

/// GET /user - Profile of the authenticated user
///
/// # Responses
///
/// * 200 OK - Profile
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn get_profile(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<UserProfileResponseDto>, ApiError> {
    let user = state.get_user_profile_use_case.execute(auth.id).await?;
    Ok(Json(UserProfileResponseDto::from(user)))
}

/// PUT /email - Set the e-mail address and send a verification link
///
/// # Responses
///
/// * 200 OK - E-mail stored, verification pending
/// * 400 Bad Request - Not an e-mail address
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
async fn update_email(
    JwtAuth(auth): JwtAuth,
    State(state): State<AppState>,
    Json(dto): Json<UpdateEmailDto>,
) -> Result<Json<EmailResponseDto>, ApiError> {
    dto.validate()?;

    let user = state.update_email_use_case.execute(auth.id, dto.email).await?;
    Ok(Json(EmailResponseDto::from(user)))
}

/// GET /emails/verification?token= - Confirm an e-mail address
///
/// # Responses
///
/// * 200 OK - E-mail verified
/// * 400 Bad Request - Missing, invalid, expired or stale token
#[axum::debug_handler]
async fn verify_email(
    State(state): State<AppState>,
    Query(query): Query<VerifyEmailQuery>,
) -> Result<Json<MessageResponseDto>, ApiError> {
    let token = query
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("token is required".to_string()))?;

    state.verify_email_use_case.execute(&token).await?;
    Ok(Json(MessageResponseDto::ok()))
}
