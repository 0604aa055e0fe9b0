use axum::extract::{rejection::PathRejection, Path, State};
use chrono::Utc;

use crate::database::models::age_in_years;
use crate::handlers::saturating_numeric_segment;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /users/filter/:age - names of users at least `age` years old
pub async fn filter_users_by_age(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> ApiResult<Vec<String>> {
    let min_age = saturating_numeric_segment(segment)?;
    let users = state.store.list_birth_dates().await?;

    let now = Utc::now();
    let names = users
        .into_iter()
        .filter(|user| u64::try_from(age_in_years(user.dob, now)).is_ok_and(|age| age >= min_age))
        .map(|user| user.name)
        .collect();

    Ok(ApiResponse::success(names))
}
