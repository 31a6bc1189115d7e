//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::application::services::TOKEN_INVALID;
use crate::{error::AppError, state::AppState};

/// Identity of the authenticated caller.
///
/// Inserted as a request extension by [`layer`] and consumed by handlers as
/// an explicit argument, so the caller is never read from ambient state.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
}

/// Authenticates requests using Bearer access tokens from the
/// Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <access token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature, expiry, and token type (access, not refresh)
/// 3. Insert [`CurrentUser`] into request extensions
/// 4. Continue to next middleware/handler
///
/// Verification is stateless; no database round trip per request.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or not Bearer
/// - Token signature is invalid or the token has expired
/// - A refresh token is presented in place of an access token
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized(TOKEN_INVALID))?;

    let claims = st.token_service.verify_access(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}
