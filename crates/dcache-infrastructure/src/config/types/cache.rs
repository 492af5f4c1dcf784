//! Cache configuration types

use crate::constants::{CACHE_CONNECTION_TIMEOUT_SECS, DEFAULT_REDIS_URL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache backends selectable at composition time
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Dictionary-backed stand-in
    #[default]
    Memory,
    /// Remote Redis server
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled; a disabled cache stores nothing
    pub enabled: bool,

    /// Cache backend
    pub provider: CacheBackend,

    /// Redis URL (for the Redis backend)
    pub redis_url: Option<String>,

    /// Namespace prepended to every key, empty for none
    pub namespace: String,

    /// Timeout for establishing the backend connection
    pub connection_timeout_secs: u64,
}

impl CacheConfig {
    /// Connection timeout as a `Duration`
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Configured Redis URL or the local default
    pub fn effective_redis_url(&self) -> &str {
        self.redis_url.as_deref().unwrap_or(DEFAULT_REDIS_URL)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CacheBackend::Memory,
            redis_url: None,
            namespace: String::new(),
            connection_timeout_secs: CACHE_CONNECTION_TIMEOUT_SECS,
        }
    }
}
