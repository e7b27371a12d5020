//! # In-Memory Expiring Cache
//!
//! The duplicate-detection cache shared by every request.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MemoryCache<V>                                                         │
//! │                                                                         │
//! │  Mutex<HashMap<String, Entry<V>>>                                      │
//! │      Entry { value, expires_at: Option<Instant> }                      │
//! │                                                                         │
//! │  get      → clone of value if expires_at is None or in the future      │
//! │  set      → overwrite                                                  │
//! │  insert_if_absent → check + write under one lock                       │
//! │                                                                         │
//! │  Expired entries are invisible immediately and removed lazily:         │
//! │  on overwrite, or by purge_expired() / the janitor task.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Mutex, Not RwLock?
//! Every accepted receipt writes, and each critical section is a single
//! hash-map operation. The lock is never held across I/O or `.await`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use points_core::{Expiration, ExpiringCache};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::ServiceConfig;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(deadline) if deadline <= now)
    }
}

/// Thread-safe in-memory [`ExpiringCache`].
#[derive(Debug)]
pub struct MemoryCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    default_ttl: Option<Duration>,
}

impl<V: Clone + Send> MemoryCache<V> {
    /// Creates an empty cache. `None` keeps default-expiration entries forever.
    pub fn new(default_ttl: Option<Duration>) -> Self {
        MemoryCache {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Creates an empty cache using the configured default TTL.
    pub fn with_config(config: &ServiceConfig) -> Self {
        Self::new(config.cache_ttl)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock().values().filter(|e| !e.is_expired(now)).count()
    }

    /// True when no live entries remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired(now));
        before - entries.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn entry(&self, value: V, expiration: Expiration, now: Instant) -> Entry<V> {
        Entry {
            value,
            expires_at: expiration
                .resolve(self.default_ttl)
                .and_then(|ttl| now.checked_add(ttl)),
        }
    }
}

impl<V: Clone + Send + Sync + 'static> MemoryCache<V> {
    /// Spawns a task on the current tokio runtime that purges expired
    /// entries every `interval`.
    ///
    /// The task holds only a weak reference and stops once the cache is
    /// dropped. Returns `None` when `interval` is zero.
    ///
    /// ## Panics
    /// When called outside a tokio runtime.
    pub fn spawn_janitor(cache: &Arc<Self>, interval: Duration) -> Option<JoinHandle<()>> {
        if interval.is_zero() {
            return None;
        }

        let weak = Arc::downgrade(cache);
        info!(interval_secs = interval.as_secs(), "Starting cache janitor");

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(cache) = weak.upgrade() else {
                    debug!("Cache dropped, janitor exiting");
                    break;
                };
                let removed = cache.purge_expired();
                if removed > 0 {
                    debug!(removed, "Purged expired cache entries");
                }
            }
        }))
    }
}

impl<V: Clone + Send> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::with_config(&ServiceConfig::default())
    }
}

impl<V: Clone + Send> ExpiringCache<V> for MemoryCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        self.lock()
            .get(key)
            .filter(|e| !e.is_expired(now))
            .map(|e| e.value.clone())
    }

    fn set(&self, key: &str, value: V, expiration: Expiration) {
        let entry = self.entry(value, expiration, Instant::now());
        self.lock().insert(key.to_string(), entry);
    }

    fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    fn insert_if_absent(&self, key: &str, value: V, expiration: Expiration) -> bool {
        let now = Instant::now();
        let mut entries = self.lock();

        if entries.get(key).is_some_and(|e| !e.is_expired(now)) {
            return false;
        }

        let entry = self.entry(value, expiration, now);
        entries.insert(key.to_string(), entry);
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
