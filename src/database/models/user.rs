use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user record as stored. `password` is always a bcrypt hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub dob: DateTime<Utc>,
}

/// Record to insert on registration
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub dob: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContactUpdate {
    pub name: String,
    pub email: String,
}

/// `{id, name}` projection used by the user listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
}

/// `{name}` projection used by fetch-by-id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserName {
    pub name: String,
}

/// `{name, dob}` projection used by the age filter
#[derive(Debug, Clone, FromRow)]
pub struct UserBirthDate {
    pub name: String,
    pub dob: DateTime<Utc>,
}

/// Identifier the store assigned to a freshly inserted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub inserted_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Milliseconds in a 365.25-day year
const MILLIS_PER_YEAR: i64 = 31_557_600_000;

/// Whole years between `dob` and `now`, floored, using a fixed 365.25-day year
pub fn age_in_years(dob: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - dob).num_milliseconds().div_euclid(MILLIS_PER_YEAR)
}
