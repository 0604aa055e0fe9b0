use axum::extract::State;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::TokenResponse;
use crate::auth::hash_password;
use crate::database::models::NewUser;
use crate::error::ApiError;
use crate::handlers::require_non_empty;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
}

/// POST /register - create a user and return a token for it
///
/// Expected input:
/// ```json
/// { "id": 1, "name": "Ann", "email": "ann@x.com", "password": "pw", "dob": "1990-01-01" }
/// ```
///
/// Responds 201 `{"token": "..."}`. The token's `id` claim is the
/// application id from the request, the same claim login issues.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> ApiResult<TokenResponse> {
    if payload.id < 0 {
        return Err(ApiError::bad_request("Field 'id' must be a non-negative integer"));
    }
    require_non_empty("name", &payload.name)?;
    require_non_empty("email", &payload.email)?;
    require_non_empty("password", &payload.password)?;
    let dob = parse_dob(&payload.dob)?;

    let password_hash = hash_password(payload.password, state.bcrypt_cost).await?;

    let inserted = state
        .store
        .insert(NewUser {
            id: payload.id,
            name: payload.name,
            email: payload.email,
            password_hash,
            dob,
        })
        .await?;

    tracing::info!(
        "Registered user {} (document {})",
        payload.id,
        inserted.inserted_id
    );

    let token = state.tokens.issue(payload.id)?;
    Ok(ApiResponse::created(TokenResponse { token }))
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
fn parse_dob(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ApiError::bad_request(format!("Invalid date of birth: '{}'", raw)))
}
