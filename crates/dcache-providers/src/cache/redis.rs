//! Redis distributed cache provider
//!
//! Maps every `CacheProvider` operation onto the native Redis command:
//!
//! | Operation | Command |
//! |-----------|---------|
//! | scalar get/set | `GET` / `SET` |
//! | delete, exists | `DEL` / `EXISTS` |
//! | key enumeration | `SCAN MATCH <prefix>*` |
//! | length | `TYPE` then `HLEN` |
//! | row writes | `HSET` |
//! | row reads | `HGET` / `HMGET` / `HVALS` |
//! | row existence | `HEXISTS` |
//! | row deletes | `HDEL` |
//! | liveness | `PING` |
//!
//! Redis drops a hash once its last field is deleted, so emptied collections
//! disappear from the key space without extra work.
//!
//! No retry happens here: reconnection is left to the connection manager and
//! every command failure is returned to the caller.
//!
//! ## Example
//!
//! ```ignore
//! use dcache_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379")?
//!     .with_connect_timeout(Duration::from_secs(2));
//! ```

use crate::constants::{REDIS_CONNECTION_TIMEOUT_SECS, REDIS_SCAN_BATCH_SIZE};
use async_trait::async_trait;
use dcache_domain::constants::REDIS_PROVIDER_NAME;
use dcache_domain::error::{Error, Result};
use dcache_domain::ports::providers::CacheProvider;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::OnceCell;
use tracing::{debug, error};

/// Redis cache provider
///
/// The connection is established on first use and shared by every clone of
/// the provider.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    connection: Arc<OnceCell<ConnectionManager>>,
    address: String,
    tls: bool,
    connect_timeout: Duration,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// No network traffic happens until the first command.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::configuration_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
            address: redact_url(connection_string),
            tls: connection_string.starts_with("rediss://"),
            connect_timeout: Duration::from_secs(REDIS_CONNECTION_TIMEOUT_SECS),
        })
    }

    /// Bound the time spent establishing the connection
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Server address without credentials
    pub fn server_address(&self) -> &str {
        &self.address
    }

    /// Check if the Redis connection uses TLS
    pub fn is_tls(&self) -> bool {
        self.tls
    }

    /// Get the shared connection, establishing it on first use
    async fn connection(&self) -> Result<ConnectionManager> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                let connect = ConnectionManager::new(self.client.clone());
                match tokio::time::timeout(self.connect_timeout, connect).await {
                    Ok(Ok(manager)) => {
                        debug!(address = %self.address, "Connected to Redis");
                        Ok(manager)
                    }
                    Ok(Err(e)) => {
                        error!(address = %self.address, error = %e, "Redis connection failed");
                        Err(Error::network_with_source(
                            format!("Failed to connect to Redis at {}: {e}", self.address),
                            e,
                        ))
                    }
                    Err(elapsed) => {
                        error!(address = %self.address, "Redis connection timed out");
                        Err(Error::network_with_source(
                            format!(
                                "Timed out after {:?} connecting to Redis at {}",
                                self.connect_timeout, self.address
                            ),
                            elapsed,
                        ))
                    }
                }
            })
            .await?;
        Ok(connection.clone())
    }
}

/// Wrap a failed command into a provider error
fn command_error(command: &'static str, key: &str, e: RedisError) -> Error {
    error!(command, key, error = %e, "Redis command failed");
    Error::infrastructure_with_source(format!("Redis {command} failed for '{key}': {e}"), e)
}

/// Escape glob metacharacters so a prefix is matched literally by `SCAN MATCH`
fn escape_glob(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Drop credentials from a connection URL
fn redact_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
            format!("{scheme}://{host}")
        }
        None => url.to_string(),
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| command_error("GET", key, e))?;
        Ok(value)
    }

    async fn set_json(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| command_error("SET", key, e))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn
            .del(key)
            .await
            .map_err(|e| command_error("DEL", key, e))?;
        Ok(removed > 0)
    }

    async fn delete_all(&self, pattern: &str) -> Result<u64> {
        let keys = self.get_keys(pattern).await?;
        let mut removed = 0;
        for key in &keys {
            if self.delete(key).await? {
                removed += 1;
            }
        }
        debug!(pattern, matched = keys.len(), removed, "Deleted keys by prefix");
        Ok(removed)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| command_error("EXISTS", key, e))?;
        Ok(exists)
    }

    async fn get_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;
        let match_pattern = format!("{}*", escape_glob(pattern));

        let mut cursor: u64 = 0;
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&match_pattern)
                .arg("COUNT")
                .arg(REDIS_SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await
                .map_err(|e| command_error("SCAN", pattern, e))?;

            // SCAN may return a key more than once
            for key in batch {
                if key.starts_with(pattern) && seen.insert(key.clone()) {
                    keys.push(key);
                }
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }
        Ok(keys)
    }

    async fn get_length(&self, collection_key: &str) -> Result<u64> {
        let mut conn = self.connection().await?;
        let kind: String = redis::cmd("TYPE")
            .arg(collection_key)
            .query_async(&mut conn)
            .await
            .map_err(|e| command_error("TYPE", collection_key, e))?;

        match kind.as_str() {
            "none" => Ok(0),
            "hash" => {
                let length: u64 = conn
                    .hlen(collection_key)
                    .await
                    .map_err(|e| command_error("HLEN", collection_key, e))?;
                Ok(length)
            }
            _ => Ok(1),
        }
    }

    async fn set_row_json(
        &self,
        collection_key: &str,
        entry_key: &str,
        value: &str,
    ) -> Result<bool> {
        let mut conn = self.connection().await?;
        let _: u64 = conn
            .hset(collection_key, entry_key, value)
            .await
            .map_err(|e| command_error("HSET", collection_key, e))?;
        Ok(true)
    }

    async fn set_rows_json(
        &self,
        collection_key: &str,
        entries: &HashMap<String, String>,
    ) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection().await?;
        let items: Vec<(&str, &str)> = entries
            .iter()
            .map(|(entry_key, value)| (entry_key.as_str(), value.as_str()))
            .collect();
        let _: () = conn
            .hset_multiple(collection_key, &items)
            .await
            .map_err(|e| command_error("HSET", collection_key, e))?;
        Ok(())
    }

    async fn read_row_json(&self, collection_key: &str, entry_key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn
            .hget(collection_key, entry_key)
            .await
            .map_err(|e| command_error("HGET", collection_key, e))?;
        Ok(value)
    }

    async fn read_rows_json(
        &self,
        collection_key: &str,
        entry_keys: &[String],
    ) -> Result<Vec<String>> {
        if entry_keys.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.connection().await?;
        let values: Vec<Option<String>> = redis::cmd("HMGET")
            .arg(collection_key)
            .arg(entry_keys)
            .query_async(&mut conn)
            .await
            .map_err(|e| command_error("HMGET", collection_key, e))?;
        Ok(values.into_iter().flatten().collect())
    }

    async fn read_all_rows_json(&self, collection_key: &str) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;
        let values: Vec<String> = conn
            .hvals(collection_key)
            .await
            .map_err(|e| command_error("HVALS", collection_key, e))?;
        Ok(values)
    }

    async fn exists_row(&self, collection_key: &str, entry_key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn
            .hexists(collection_key, entry_key)
            .await
            .map_err(|e| command_error("HEXISTS", collection_key, e))?;
        Ok(exists)
    }

    async fn delete_row(&self, collection_key: &str, entry_key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn
            .hdel(collection_key, entry_key)
            .await
            .map_err(|e| command_error("HDEL", collection_key, e))?;
        Ok(removed > 0)
    }

    async fn delete_rows(
        &self,
        collection_key: &str,
        entry_keys: &HashSet<String>,
    ) -> Result<u64> {
        let mut removed = 0;
        for entry_key in entry_keys {
            if self.delete_row(collection_key, entry_key).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn delete_row_set(
        &self,
        collection_key: &str,
        entry_keys: &HashSet<String>,
    ) -> Result<bool> {
        if entry_keys.is_empty() {
            return Ok(false);
        }
        let mut conn = self.connection().await?;
        let fields: Vec<String> = entry_keys.iter().cloned().collect();
        let removed: u64 = conn
            .hdel(collection_key, fields)
            .await
            .map_err(|e| command_error("HDEL", collection_key, e))?;
        Ok(removed > 0)
    }

    async fn ping(&self) -> Result<Duration> {
        let mut conn = self.connection().await?;
        let started = Instant::now();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| command_error("PING", "", e))?;
        Ok(started.elapsed())
    }

    fn provider_name(&self) -> &str {
        REDIS_PROVIDER_NAME
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.address)
            .field("tls", &self.tls)
            .field("connected", &self.connection.initialized())
            .finish()
    }
}
