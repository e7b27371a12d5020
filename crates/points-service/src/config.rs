//! Service configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                     | Default | Meaning                              |
//! |------------------------------|---------|--------------------------------------|
//! | `RECEIPT_CACHE_TTL_SECS`     | 300     | Duplicate window; `0` = forever      |
//! | `RECEIPT_CACHE_CLEANUP_SECS` | 600     | Janitor interval; `0` = no janitor   |

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default lifetime of a duplicate-detection entry (5 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default interval between expired-entry sweeps (10 minutes).
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 600;

/// Receipt service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Default lifetime of cache entries; `None` keeps them forever
    pub cache_ttl: Option<Duration>,

    /// How often expired entries are swept; `None` disables the janitor
    pub cleanup_interval: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            cache_ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            cleanup_interval: Some(Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS)),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_secs = seconds(&lookup, "RECEIPT_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let cleanup_secs = seconds(
            &lookup,
            "RECEIPT_CACHE_CLEANUP_SECS",
            DEFAULT_CLEANUP_INTERVAL_SECS,
        )?;

        Ok(ServiceConfig {
            cache_ttl: non_zero(ttl_secs),
            cleanup_interval: non_zero(cleanup_secs),
        })
    }
}

fn seconds<F>(lookup: &F, key: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

fn non_zero(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

// =============================================================================
// Unit Tests
// =============================================================================
