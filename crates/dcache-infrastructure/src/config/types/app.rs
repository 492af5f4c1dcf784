//! Application configuration root

use super::{CacheConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration loaded by [`ConfigLoader`](crate::config::ConfigLoader)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Cache backend configuration
    pub cache: CacheConfig,
}
