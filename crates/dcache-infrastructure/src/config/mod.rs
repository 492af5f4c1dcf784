//! Configuration management
//!
//! Layered configuration with Figment: defaults, then a TOML file, then
//! `DCACHE_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, CacheBackend, CacheConfig, LoggingConfig};
