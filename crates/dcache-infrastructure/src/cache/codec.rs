//! JSON codec for cached values
//!
//! Every value is stored as UTF-8 JSON text. Encoding failures are errors;
//! decoding failures are logged and reported as an absent value.

use dcache_domain::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Encode a value as JSON text
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode JSON text, `None` when it does not fit `T`
///
/// `key` only feeds the log line.
pub fn decode<T: DeserializeOwned>(key: &str, json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Discarding undecodable cached value");
            None
        }
    }
}
