//! Handlers for registration and token endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest,
    RegisterResponse,
};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// The password is hashed before storage and never appears in any response.
///
/// # Errors
///
/// Returns 400 if a field fails validation or the email is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(user))))
}

/// Issues an access/refresh pair for valid credentials.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// Identity is keyed by email.
///
/// # Errors
///
/// Returns 401 when the email is unknown or the password does not match;
/// the two cases are indistinguishable in the response.
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .authenticate(&payload.email, &payload.password)
        .await?;
    let pair = state.token_service.issue_pair(user.id, &user.email)?;

    Ok(Json(LoginResponse {
        access: pair.access,
        refresh: pair.refresh,
    }))
}

/// Exchanges a refresh token for a new access token.
///
/// # Endpoint
///
/// `POST /auth/token/refresh`
///
/// # Errors
///
/// Returns 401 if the token is invalid, expired, or not a refresh token.
pub async fn refresh_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    payload.validate()?;

    let access = state.token_service.refresh_access(&payload.refresh)?;

    Ok(Json(RefreshResponse { access }))
}
