use axum::extract::{rejection::PathRejection, Path, State};

use crate::database::models::{UserName, UserSummary};
use crate::handlers::numeric_segment;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /users - every user as `{id, name}`
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserSummary>> {
    let users = state.store.list_summaries().await?;
    Ok(ApiResponse::success(users))
}

/// GET /users/:id - `{name}` of the user, or `null` when there is none
pub async fn get_user(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> ApiResult<Option<UserName>> {
    let id: i64 = numeric_segment(segment)?;
    let user = state.store.find_name_by_id(id).await?;
    Ok(ApiResponse::success(user))
}
