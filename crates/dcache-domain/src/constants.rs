//! Domain-level constants shared by every cache provider

/// Separator placed between a namespace and a key
pub const NAMESPACE_SEPARATOR: &str = ":";

/// Provider name of the remote Redis backend
pub const REDIS_PROVIDER_NAME: &str = "redis";

/// Provider name of the in-memory dictionary backend
pub const MEMORY_PROVIDER_NAME: &str = "memory";

/// Provider name of the no-op backend used when caching is disabled
pub const NULL_PROVIDER_NAME: &str = "null";
