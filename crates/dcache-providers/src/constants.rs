//! Provider-specific constants

/// Default timeout for establishing a Redis connection (seconds)
pub const REDIS_CONNECTION_TIMEOUT_SECS: u64 = 10;

/// Keys requested per SCAN round trip
pub const REDIS_SCAN_BATCH_SIZE: usize = 250;

/// Smallest latency the in-memory provider reports from `ping`
pub const MEMORY_PING_FLOOR_MICROS: u64 = 1;
