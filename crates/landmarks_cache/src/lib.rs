//! # Landmarks Cache
//!
//! A string-keyed cache whose entries expire a fixed time after they were
//! stored. Expired entries are dropped lazily, on the `get` that notices them,
//! or in bulk with [`TtlCache::purge_expired`].
//!
//! The cache is a plain value: construct it, use it, drop it. Time is read
//! through a [`TimeSource`] so expiry can be driven by hand in tests.
//!
//! ```rust
//! use landmarks_cache::TtlCache;
//!
//! let mut cache = TtlCache::new(); // one hour TTL
//! cache.set("landmark_1", 1834);
//! assert_eq!(cache.get("landmark_1"), Some(&1834));
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

/// Default time-to-live: one hour.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Where the cache reads "now" from.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven time. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualTimeSource {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Size and keys of a cache at one moment. Keys are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// Key-value cache with a single TTL for every entry.
pub struct TtlCache<V, T: TimeSource = SystemTimeSource> {
    entries: HashMap<String, CacheEntry<V>>,
    ttl: Duration,
    time: T,
}

impl<V> TtlCache<V> {
    /// Cache with the default one-hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_time_source(ttl, SystemTimeSource)
    }
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, T: TimeSource> TtlCache<V, T> {
    pub fn with_time_source(ttl: Duration, time: T) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            time,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store `value` under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let stored_at = self.time.now();
        self.entries.insert(key.into(), CacheEntry { value, stored_at });
    }

    /// Value for `key` if present and not expired.
    ///
    /// An entry is expired once strictly more than the TTL has elapsed since
    /// it was stored; it is removed by this call.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let now = self.time.now();
        let expired = match self.entries.get(key) {
            Some(entry) => self.is_expired(entry, now),
            None => return None,
        };
        if expired {
            trace!(key, "cache entry expired");
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.time.now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| now - entry.stored_at <= ttl);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry count, including entries that expired but were not yet dropped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            size: keys.len(),
            keys,
        }
    }

    fn is_expired(&self, entry: &CacheEntry<V>, now: DateTime<Utc>) -> bool {
        now - entry.stored_at > self.ttl
    }
}
