use async_trait::async_trait;
use thiserror::Error;

use super::models::{
    ContactUpdate, InsertOutcome, NewUser, UpdateOutcome, UserBirthDate, UserName, UserRecord,
    UserSummary,
};

/// Errors from a user store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistent collection of user records.
///
/// Lookups by id or email return the first matching record in insertion
/// order; the store does not enforce uniqueness of either key.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user projected to `{id, name}`
    async fn list_summaries(&self) -> Result<Vec<UserSummary>, StoreError>;

    /// First user with `id`, projected to `{name}`
    async fn find_name_by_id(&self, id: i64) -> Result<Option<UserName>, StoreError>;

    /// Every user projected to `{name, dob}`
    async fn list_birth_dates(&self) -> Result<Vec<UserBirthDate>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, StoreError>;

    /// Set name and email on the first user with `id`. A record whose
    /// values already equal the update counts as matched but not modified.
    async fn update_contact(
        &self,
        id: i64,
        update: ContactUpdate,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Liveness probe
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backend resources on shutdown
    async fn close(&self) {}
}
