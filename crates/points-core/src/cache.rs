//! # Expiring Cache Contract
//!
//! The duplicate-detection cache is owned by the caller and handed to
//! [`crate::identifier::identify`]. This module only defines what the cache
//! must do; the in-memory implementation lives in `points-service`.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get(key)            → value, unless absent or expired                  │
//! │  set(key, value, e)  → store, replacing any previous entry              │
//! │  insert_if_absent    → store only if no live entry exists               │
//! │  default_ttl()       → lifetime used for Expiration::Default            │
//! │                                                                         │
//! │  Thread-safe: &self everywhere, implementors are Send + Sync           │
//! │  No delete: entries disappear only by expiring                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

/// How long a cache entry lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiration {
    /// Use the cache's configured default lifetime.
    #[default]
    Default,

    /// Keep the entry until the cache is dropped.
    Never,

    /// Expire after the given duration.
    After(Duration),
}

impl Expiration {
    /// Resolves this policy against a cache default.
    ///
    /// `None` means the entry never expires.
    pub fn resolve(self, default_ttl: Option<Duration>) -> Option<Duration> {
        match self {
            Expiration::Default => default_ttl,
            Expiration::Never => None,
            Expiration::After(ttl) => Some(ttl),
        }
    }
}

/// A thread-safe key/value cache whose entries expire.
pub trait ExpiringCache<V>: Send + Sync {
    /// Returns the live value stored under `key`.
    fn get(&self, key: &str) -> Option<V>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: V, expiration: Expiration);

    /// Lifetime applied for [`Expiration::Default`]. `None` means forever.
    fn default_ttl(&self) -> Option<Duration>;

    /// Stores `value` only if `key` holds no live entry.
    ///
    /// Returns `true` if the value was stored. The provided implementation is
    /// a plain get-then-set; implementations shared between threads should
    /// override it so the check and the write happen under one lock.
    fn insert_if_absent(&self, key: &str, value: V, expiration: Expiration) -> bool {
        if self.get(key).is_some() {
            return false;
        }
        self.set(key, value, expiration);
        true
    }
}

impl<V, C> ExpiringCache<V> for &C
where
    C: ExpiringCache<V> + ?Sized,
{
    fn get(&self, key: &str) -> Option<V> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: V, expiration: Expiration) {
        (**self).set(key, value, expiration)
    }

    fn default_ttl(&self) -> Option<Duration> {
        (**self).default_ttl()
    }

    fn insert_if_absent(&self, key: &str, value: V, expiration: Expiration) -> bool {
        (**self).insert_if_absent(key, value, expiration)
    }
}

impl<V, C> ExpiringCache<V> for std::sync::Arc<C>
where
    C: ExpiringCache<V> + ?Sized,
{
    fn get(&self, key: &str) -> Option<V> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: V, expiration: Expiration) {
        (**self).set(key, value, expiration)
    }

    fn default_ttl(&self) -> Option<Duration> {
        (**self).default_ttl()
    }

    fn insert_if_absent(&self, key: &str, value: V, expiration: Expiration) -> bool {
        (**self).insert_if_absent(key, value, expiration)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
