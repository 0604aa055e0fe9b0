use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::{
    ContactUpdate, InsertOutcome, NewUser, UpdateOutcome, UserBirthDate, UserName, UserRecord,
    UserSummary,
};
use super::store::{StoreError, UserStore};

#[derive(Debug, Clone)]
struct StoredUser {
    doc_id: i64,
    record: UserRecord,
}

#[derive(Debug, Default)]
struct Collection {
    next_doc_id: i64,
    users: Vec<StoredUser>,
}

/// In-process user store, selected with a `memory://` database URL.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Collection>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_summaries(&self) -> Result<Vec<UserSummary>, StoreError> {
        let collection = self.inner.read().await;
        Ok(collection
            .users
            .iter()
            .map(|u| UserSummary {
                id: u.record.id,
                name: u.record.name.clone(),
            })
            .collect())
    }

    async fn find_name_by_id(&self, id: i64) -> Result<Option<UserName>, StoreError> {
        let collection = self.inner.read().await;
        Ok(collection
            .users
            .iter()
            .find(|u| u.record.id == id)
            .map(|u| UserName {
                name: u.record.name.clone(),
            }))
    }

    async fn list_birth_dates(&self) -> Result<Vec<UserBirthDate>, StoreError> {
        let collection = self.inner.read().await;
        Ok(collection
            .users
            .iter()
            .map(|u| UserBirthDate {
                name: u.record.name.clone(),
                dob: u.record.dob,
            })
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let collection = self.inner.read().await;
        Ok(collection
            .users
            .iter()
            .find(|u| u.record.email == email)
            .map(|u| u.record.clone()))
    }

    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, StoreError> {
        let mut collection = self.inner.write().await;
        collection.next_doc_id += 1;
        let doc_id = collection.next_doc_id;

        collection.users.push(StoredUser {
            doc_id,
            record: UserRecord {
                id: user.id,
                name: user.name,
                email: user.email,
                password: user.password_hash,
                dob: user.dob,
            },
        });

        Ok(InsertOutcome { inserted_id: doc_id })
    }

    async fn update_contact(
        &self,
        id: i64,
        update: ContactUpdate,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut collection = self.inner.write().await;

        let Some(stored) = collection.users.iter_mut().find(|u| u.record.id == id) else {
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            });
        };

        if stored.record.name == update.name && stored.record.email == update.email {
            return Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: 0,
            });
        }

        stored.record.name = update.name;
        stored.record.email = update.email;
        tracing::debug!("Updated user document {}", stored.doc_id);

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: 1,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
