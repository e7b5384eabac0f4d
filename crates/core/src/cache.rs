//! In-memory key/value cache with per-entry TTL.
//!
//! Expiry is lazy: a stale entry is dropped when [`TtlCache::get`] finds
//! it, or in bulk by [`TtlCache::cleanup`]. Nothing runs in the
//! background. Timing uses [`tokio::time::Instant`] so tests can drive the
//! clock with `tokio::time::pause`/`advance`.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// A stored value plus the metadata needed to judge its freshness.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// An entry is valid while its age is strictly below its TTL.
    pub fn is_valid(&self, now: Instant) -> bool {
        self.age(now) < self.ttl
    }
}

/// Counts reported by [`TtlCache::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub total: usize,
    pub valid: usize,
    pub expired: usize,
}

/// Snapshot of a single entry, for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheEntryInfo {
    pub valid: bool,
    pub age: Duration,
    pub ttl: Duration,
}

struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    default_ttl: Duration,
    enabled: bool,
}

/// Thread-safe TTL cache; share it behind an `Arc`.
pub struct TtlCache<V> {
    state: RwLock<CacheState<V>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(default_ttl: Duration, enabled: bool) -> Self {
        Self {
            state: RwLock::new(CacheState {
                entries: HashMap::new(),
                default_ttl,
                enabled,
            }),
        }
    }

    /// Return the value for `key` if present and still valid. A stale
    /// entry is removed on the way out.
    pub async fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        {
            let state = self.state.read().await;
            if !state.enabled {
                return None;
            }
            match state.entries.get(key) {
                None => return None,
                Some(entry) if entry.is_valid(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        let mut state = self.state.write().await;
        // Another writer may have replaced the entry between the two locks.
        if let Some(entry) = state.entries.get(key) {
            if entry.is_valid(now) {
                return Some(entry.value.clone());
            }
            state.entries.remove(key);
            tracing::trace!(key, "Dropped expired cache entry");
        }
        None
    }

    /// Store `value` under the default TTL.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        let mut state = self.state.write().await;
        let ttl = state.default_ttl;
        Self::insert(&mut state, key.into(), value, ttl);
    }

    /// Store `value` with an explicit TTL.
    pub async fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut state = self.state.write().await;
        Self::insert(&mut state, key.into(), value, ttl);
    }

    fn insert(state: &mut CacheState<V>, key: String, value: V, ttl: Duration) {
        if !state.enabled {
            return;
        }
        state.entries.insert(
            key,
            CacheEntry {
                value,
                created_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Remove `key`; returns whether an entry was removed.
    pub async fn invalidate(&self, key: &str) -> bool {
        self.state.write().await.entries.remove(key).is_some()
    }

    pub async fn clear(&self) {
        self.state.write().await.entries.clear();
    }

    /// Drop every expired entry and return how many were removed.
    pub async fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut state = self.state.write().await;
        let before = state.entries.len();
        state.entries.retain(|_, entry| entry.is_valid(now));
        let removed = before - state.entries.len();
        if removed > 0 {
            tracing::debug!(removed, "Cleaned up expired cache entries");
        }
        removed
    }

    pub async fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let state = self.state.read().await;
        let total = state.entries.len();
        let valid = state
            .entries
            .values()
            .filter(|entry| entry.is_valid(now))
            .count();
        CacheStats {
            total,
            valid,
            expired: total - valid,
        }
    }

    /// Freshness details for `key`, or `None` if nothing is stored.
    pub async fn entry_info(&self, key: &str) -> Option<CacheEntryInfo> {
        let now = Instant::now();
        let state = self.state.read().await;
        state.entries.get(key).map(|entry| CacheEntryInfo {
            valid: entry.is_valid(now),
            age: entry.age(now),
            ttl: entry.ttl,
        })
    }

    /// Whether a valid entry exists. Unlike [`get`](Self::get) this never
    /// removes anything.
    pub async fn contains_valid(&self, key: &str) -> bool {
        let now = Instant::now();
        let state = self.state.read().await;
        state.enabled
            && state
                .entries
                .get(key)
                .is_some_and(|entry| entry.is_valid(now))
    }

    /// Apply new settings. Existing entries keep the TTL they were stored
    /// with.
    pub async fn configure(&self, enabled: bool, default_ttl: Duration) {
        let mut state = self.state.write().await;
        state.enabled = enabled;
        state.default_ttl = default_ttl;
    }

    pub async fn is_enabled(&self) -> bool {
        self.state.read().await.enabled
    }

    pub async fn default_ttl(&self) -> Duration {
        self.state.read().await.default_ttl
    }
}
