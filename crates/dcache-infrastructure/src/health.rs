//! Cache health checks
//!
//! Turns a backend ping into a serializable status record.

use crate::cache::DistributedCache;
use crate::logging::log_health_check;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Backend answered
    Up,
    /// Backend unreachable or failing
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the backend is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the checked component
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// When the check ran
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Measured round trip in microseconds
    pub response_time_us: u64,
    /// Failure message, if any
    pub error: Option<String>,
}

impl HealthCheck {
    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Up,
            timestamp: chrono::Utc::now(),
            response_time_us: 0,
            error: None,
        }
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Down,
            timestamp: chrono::Utc::now(),
            response_time_us: 0,
            error,
        }
    }

    /// Set response time
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_us = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self
    }
}

/// Ping the cache backend and report its health
///
/// Never fails: a ping error becomes a `Down` record.
pub async fn check_cache(cache: &DistributedCache) -> HealthCheck {
    let name = format!("cache:{}", cache.provider_name());
    let check = match cache.ping().await {
        Ok(latency) => HealthCheck::healthy(name).with_response_time(latency),
        Err(e) => HealthCheck::failed(name, Some(e.to_string())),
    };
    log_health_check(&check.name, check.status.is_healthy(), check.error.as_deref());
    check
}
