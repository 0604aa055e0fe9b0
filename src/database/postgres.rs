use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use std::time::Duration;
use tracing::info;

use super::models::{
    ContactUpdate, InsertOutcome, NewUser, UpdateOutcome, UserBirthDate, UserName, UserRecord,
    UserSummary,
};
use super::store::{StoreError, UserStore};
use crate::config::DatabaseConfig;

/// PostgreSQL-backed user store. `doc_id` is the store's own record key;
/// `id` is the application id supplied at registration.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Connect and make sure the users table exists
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.url)
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let store = Self { pool };
        store.ensure_schema().await?;

        info!("Connected user store (max_connections={})", config.max_connections);
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                doc_id   BIGSERIAL PRIMARY KEY,
                id       BIGINT NOT NULL,
                name     TEXT NOT NULL,
                email    TEXT NOT NULL,
                password TEXT NOT NULL,
                dob      TIMESTAMPTZ NOT NULL
            )
        "#;

        sqlx::query(query).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_summaries(&self) -> Result<Vec<UserSummary>, StoreError> {
        let rows = sqlx::query_as::<_, UserSummary>("SELECT id, name FROM users ORDER BY doc_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_name_by_id(&self, id: i64) -> Result<Option<UserName>, StoreError> {
        let row = sqlx::query_as::<_, UserName>(
            "SELECT name FROM users WHERE id = $1 ORDER BY doc_id LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_birth_dates(&self) -> Result<Vec<UserBirthDate>, StoreError> {
        let rows =
            sqlx::query_as::<_, UserBirthDate>("SELECT name, dob FROM users ORDER BY doc_id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password, dob FROM users WHERE email = $1 ORDER BY doc_id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, StoreError> {
        let row = sqlx::query(
            "INSERT INTO users (id, name, email, password, dob) VALUES ($1, $2, $3, $4, $5) RETURNING doc_id",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.dob)
        .fetch_one(&self.pool)
        .await?;

        Ok(InsertOutcome {
            inserted_id: row.try_get("doc_id")?,
        })
    }

    async fn update_contact(
        &self,
        id: i64,
        update: ContactUpdate,
    ) -> Result<UpdateOutcome, StoreError> {
        let query = r#"
            WITH target AS (
                SELECT doc_id FROM users WHERE id = $1 ORDER BY doc_id LIMIT 1
            ),
            updated AS (
                UPDATE users SET name = $2, email = $3
                WHERE doc_id IN (SELECT doc_id FROM target)
                AND (name IS DISTINCT FROM $2 OR email IS DISTINCT FROM $3)
                RETURNING doc_id
            )
            SELECT
                (SELECT COUNT(*) FROM target) AS matched,
                (SELECT COUNT(*) FROM updated) AS modified
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .bind(&update.name)
            .bind(&update.email)
            .fetch_one(&self.pool)
            .await?;

        let matched: i64 = row.try_get("matched")?;
        let modified: i64 = row.try_get("modified")?;

        Ok(UpdateOutcome {
            matched_count: count_to_u64(matched)?,
            modified_count: count_to_u64(modified)?,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Closed user store pool");
    }
}

fn count_to_u64(count: i64) -> Result<u64, StoreError> {
    u64::try_from(count).map_err(|_| StoreError::QueryError(format!("negative row count {}", count)))
}
