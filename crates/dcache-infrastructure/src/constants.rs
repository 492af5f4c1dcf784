//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Provider names live in `dcache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dcache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dcache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DCACHE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Default timeout for establishing the backend connection (seconds)
pub const CACHE_CONNECTION_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER_VAR: &str = "DCACHE_LOG";

/// Default log file name stem for the rolling appender
pub const LOG_FILE_STEM: &str = "dcache";
