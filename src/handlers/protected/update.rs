use axum::extract::{rejection::PathRejection, Path, State};
use serde::Deserialize;

use crate::database::models::{ContactUpdate, UpdateOutcome};
use crate::error::ApiError;
use crate::handlers::{numeric_segment, require_non_empty};
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::state::AppState;

pub const USER_MISSING: &str = "User doesn't exists";

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub name: String,
    pub email: String,
}

/// PATCH /update/:id - replace a user's name and email
///
/// Responds with the store's `{matched_count, modified_count}`. Nothing
/// modified (unknown id, or values already equal) is a 400.
pub async fn update_user(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
    body: Result<JsonBody<UpdateRequest>, ApiError>,
) -> ApiResult<UpdateOutcome> {
    let id: i64 = numeric_segment(segment)?;
    let JsonBody(payload) = body?;
    require_non_empty("name", &payload.name)?;
    require_non_empty("email", &payload.email)?;

    let outcome = state
        .store
        .update_contact(
            id,
            ContactUpdate {
                name: payload.name,
                email: payload.email,
            },
        )
        .await?;

    if outcome.modified_count == 0 {
        return Err(ApiError::bad_request(USER_MISSING));
    }

    tracing::info!("Updated contact details of user {}", id);
    Ok(ApiResponse::success(outcome))
}
