use axum::extract::State;
use serde::Deserialize;

use super::TokenResponse;
use crate::auth::verify_password;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::state::AppState;

pub const USER_NOT_AVAILABLE: &str = "User is not Available";
pub const BAD_CREDENTIALS: &str = "Unauthorised Access!!";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login - exchange email and password for a token
///
/// Unknown email is a 404, a wrong password a 401.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> ApiResult<TokenResponse> {
    let Some(user) = state.store.find_by_email(&payload.email).await? else {
        tracing::info!("Login failed: no user with email {}", payload.email);
        return Err(ApiError::not_found(USER_NOT_AVAILABLE));
    };

    if !verify_password(payload.password, user.password).await? {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(ApiError::unauthorized(BAD_CREDENTIALS));
    }

    let token = state.tokens.issue(user.id)?;
    tracing::info!("User {} logged in", user.id);

    Ok(ApiResponse::success(TokenResponse { token }))
}
