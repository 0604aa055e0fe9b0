use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

pub const TOKEN_MISSING: &str = "Token is not available";
pub const TOKEN_REJECTED: &str = "Unauthorised User!!";

/// Authenticated user context extracted from the bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { user_id: claims.id }
    }
}

/// Bearer token gate for protected routes.
///
/// No `Authorization` header is a 403; a header that is not `Bearer <token>`
/// or a token that fails verification is a 401. The handler only runs for a
/// verified token, with [`AuthUser`] in the request extensions.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let token = extract_bearer_token(request.headers())?;
        state.tokens.verify(token).map_err(|e| {
            tracing::debug!("Rejected bearer token: {}", e);
            ApiError::unauthorized(TOKEN_REJECTED)
        })?
    };

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::forbidden(TOKEN_MISSING))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized(TOKEN_REJECTED))?;

    let mut parts = auth_str.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(ApiError::unauthorized(TOKEN_REJECTED)),
    }
}
