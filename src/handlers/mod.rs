pub mod protected;
pub mod public;

use axum::extract::{rejection::PathRejection, Path};
use std::str::FromStr;

use crate::error::ApiError;

/// Fallback for unmatched paths and unsupported methods
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

/// Parse a `{numericId}` / `{numericAge}` path segment. Only plain ASCII
/// digits that fit in `T` match; anything else is an unmatched route.
pub(crate) fn numeric_segment<T: FromStr>(
    segment: Result<Path<String>, PathRejection>,
) -> Result<T, ApiError> {
    let Ok(Path(raw)) = segment else {
        return Err(ApiError::route_not_found());
    };
    parse_digits(&raw).ok_or_else(ApiError::route_not_found)
}

/// Like [`numeric_segment`], but any digit string matches: values past
/// `u64::MAX` saturate instead of falling through to a 404.
pub(crate) fn saturating_numeric_segment(
    segment: Result<Path<String>, PathRejection>,
) -> Result<u64, ApiError> {
    let Ok(Path(raw)) = segment else {
        return Err(ApiError::route_not_found());
    };
    parse_digits_saturating(&raw).ok_or_else(ApiError::route_not_found)
}

/// Reject blank required string fields
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("Field '{}' cannot be empty", field)));
    }
    Ok(())
}

fn parse_digits<T: FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn parse_digits_saturating(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse().unwrap_or(u64::MAX))
}
