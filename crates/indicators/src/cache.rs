//! In-memory TTL cache using moka.
//!
//! Each entry carries its own TTL, so one cache type serves every payload
//! class (resolved indicators in minutes, snapshots around ten minutes).
//! Expired entries read as misses and are evicted lazily; `sweep` runs
//! moka's pending maintenance on demand.

use std::future::Future;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use moka::future::Cache;
use moka::Expiry;

const MAX_ENTRIES: u64 = 10_000;

/// Stored value plus its expiry metadata.
#[derive(Clone, Debug)]
pub struct CacheEntry<V> {
    pub value: V,
    pub ttl: Duration,
    pub expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        let expires_at = Utc::now()
            + chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::zero());
        Self {
            value,
            ttl,
            expires_at,
        }
    }
}

/// Expire every entry after its own TTL, counted from its last write.
struct PerEntryTtl;

impl<V> Expiry<String, CacheEntry<V>> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CacheEntry<V>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &CacheEntry<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Concurrency-safe key/value store with per-entry expiry.
pub struct TtlCache<V> {
    inner: Cache<String, CacheEntry<V>>,
    default_ttl: Duration,
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .expire_after(PerEntryTtl)
                .build(),
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Value for `key`, or `None` on a miss or an expired entry.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key).await.map(|entry| entry.value)
    }

    /// Insert or atomically replace `key` with its own TTL.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.inner
            .insert(key.into(), CacheEntry::new(value, ttl))
            .await;
    }

    /// Insert with the cache's default TTL.
    pub async fn insert(&self, key: impl Into<String>, value: V) {
        self.set(key, value, self.default_ttl).await;
    }

    /// Return the cached value or compute it once.
    ///
    /// Concurrent callers missing on the same key wait for a single `init`.
    pub async fn get_or_insert_with<F>(&self, key: impl Into<String>, init: F) -> V
    where
        F: Future<Output = V>,
    {
        let ttl = self.default_ttl;
        self.inner
            .entry(key.into())
            .or_insert_with(async move { CacheEntry::new(init.await, ttl) })
            .await
            .into_value()
            .value
    }

    pub async fn invalidate(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    /// Drop expired entries now instead of waiting for lazy eviction.
    pub async fn sweep(&self) {
        self.inner.run_pending_tasks().await;
    }

    /// Approximate number of live entries.
    pub fn len(&self) -> u64 {
        self.inner.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache key for one (country, indicator) pair. Country part is case-insensitive.
pub fn cache_key(country: &str, indicator: &str) -> String {
    format!("{}::{}", country.trim().to_lowercase(), indicator)
}
