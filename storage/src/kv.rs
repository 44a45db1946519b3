//! The store contract consumed by the intake handlers.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageError;

/// Prefix-scannable key-value store.
///
/// `set` is an upsert at an exact key; `get_by_prefix` returns every value
/// whose key starts with the prefix, in unspecified order (callers re-sort by
/// `createdAt`). No transactions, versioning or eviction are promised.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StorageError>;

    /// Removes a key; returns whether it existed. Not exposed over HTTP,
    /// used by tooling and tests.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;
}
