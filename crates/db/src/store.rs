use async_trait::async_trait;
use showtracker_core::types::{DbId, Record};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Operations over named collections of JSON records.
///
/// Every record returned by the store carries an integer `id` attribute that
/// the store assigned on creation.
#[async_trait]
pub trait Store: Send + Sync {
    /// All records in `collection`, in insertion order. Unknown collections are empty.
    async fn get_all(&self, collection: &str) -> Result<Vec<Record>, StoreError>;

    async fn get_by_id(&self, collection: &str, id: DbId) -> Result<Option<Record>, StoreError>;

    /// Insert `fields` as a new record and return it with its assigned `id`.
    async fn create(&self, collection: &str, fields: Record) -> Result<Record, StoreError>;

    /// Shallow-merge `patch` into the record with `id`.
    ///
    /// Returns `None` if no such record exists. The `id` attribute itself is
    /// never overwritten.
    async fn update_by_id(
        &self,
        collection: &str,
        id: DbId,
        patch: Record,
    ) -> Result<Option<Record>, StoreError>;

    /// Remove the record with `id`, returning whether one was removed.
    async fn delete_by_id(&self, collection: &str, id: DbId) -> Result<bool, StoreError>;
}
