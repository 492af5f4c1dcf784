//! Cache Provider Port
//!
//! Port for cache backend providers. A backend stores two shapes of value
//! under a flat string key space:
//!
//! - **scalars**: one encoded value per key
//! - **collections**: a sub-map from *entry key* to encoded value (a hash),
//!   addressed as `(collection_key, entry_key)`
//!
//! Payloads cross this port already encoded as JSON text so the trait stays
//! object safe; typed access lives in `dcache_infrastructure::cache`.
//!
//! ## Collection invariants
//!
//! - Deleting the last row of a collection removes the collection key.
//! - `get_length` is 0 for an absent key, 1 for a scalar and the row count
//!   for a collection.
//!
//! ## Cancellation
//!
//! Dropping a returned future abandons the operation. Multi-key operations
//! (`delete_all`, `delete_rows`) are not transactional: keys already removed
//! before the future was dropped stay removed.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Cache Provider Port
///
/// # Implementations
///
/// - **Redis**: remote key-value store, one round trip per call
/// - **Memory**: dictionary-backed stand-in for deterministic tests
/// - **Null**: stores nothing, used when caching is disabled
///
/// # Example
///
/// ```ignore
/// use dcache_domain::ports::providers::CacheProvider;
///
/// cache.set_row_json("users", "42", r#"{"name":"Ada"}"#).await?;
/// if let Some(json) = cache.read_row_json("users", "42").await? {
///     let user: User = serde_json::from_str(&json)?;
/// }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get the JSON stored at `key`, `None` when the key is absent
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` at `key`, replacing whatever was there (a collection included)
    async fn set_json(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`
    ///
    /// # Returns
    /// True if something was removed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Delete every key starting with `pattern` (ordinal prefix match)
    ///
    /// Enumerates the matching keys and deletes them one by one.
    ///
    /// # Returns
    /// The number of keys removed
    async fn delete_all(&self, pattern: &str) -> Result<u64>;

    /// Check if `key` exists, whatever shape its value has
    async fn exists(&self, key: &str) -> Result<bool>;

    /// List every key starting with `pattern` (ordinal prefix match)
    async fn get_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Length of the value at `collection_key`
    ///
    /// 0 when absent, 1 for a scalar, the row count for a collection.
    async fn get_length(&self, collection_key: &str) -> Result<u64>;

    /// Insert or overwrite one row, creating the collection if needed
    ///
    /// # Returns
    /// True if the write succeeded
    async fn set_row_json(&self, collection_key: &str, entry_key: &str, value: &str)
    -> Result<bool>;

    /// Insert or overwrite several rows in one call
    ///
    /// Rows already present under other entry keys are kept.
    async fn set_rows_json(
        &self,
        collection_key: &str,
        entries: &HashMap<String, String>,
    ) -> Result<()>;

    /// Read one row, `None` when the collection or the entry key is absent
    async fn read_row_json(&self, collection_key: &str, entry_key: &str)
    -> Result<Option<String>>;

    /// Read the rows stored under `entry_keys`, in request order
    ///
    /// Entry keys missing from the collection are skipped.
    async fn read_rows_json(&self, collection_key: &str, entry_keys: &[String])
    -> Result<Vec<String>>;

    /// Read every row of a collection
    async fn read_all_rows_json(&self, collection_key: &str) -> Result<Vec<String>>;

    /// Check if `entry_key` is present within the collection
    async fn exists_row(&self, collection_key: &str, entry_key: &str) -> Result<bool>;

    /// Delete one row
    ///
    /// # Returns
    /// True if the row was removed
    async fn delete_row(&self, collection_key: &str, entry_key: &str) -> Result<bool>;

    /// Delete several rows, one entry key at a time
    ///
    /// # Returns
    /// The number of rows removed
    async fn delete_rows(&self, collection_key: &str, entry_keys: &HashSet<String>)
    -> Result<u64>;

    /// Delete several rows with a single backend command
    ///
    /// Only backends with a native multi-field delete support this; the
    /// others fail with [`Error::NotImplemented`](crate::Error::NotImplemented).
    ///
    /// # Returns
    /// True if at least one row was removed
    async fn delete_row_set(
        &self,
        collection_key: &str,
        entry_keys: &HashSet<String>,
    ) -> Result<bool>;

    /// Round-trip latency to the backend
    async fn ping(&self) -> Result<Duration>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "redis", "memory", "null")
    fn provider_name(&self) -> &str;
}
