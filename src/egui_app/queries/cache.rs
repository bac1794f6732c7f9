//! Keyed query cache with freshness windows.
//!
//! Semantics follow the caching data-fetching layer the UI relies on:
//!
//! - A value younger than its `fresh_for` window is returned as-is.
//! - A stale value still inside `retain_for` is returned immediately while a
//!   background refresh reconciles it.
//! - An expired or absent value is fetched in the foreground; concurrent
//!   reads of the same key share one in-flight request.
//! - Every write bumps the key's generation. An in-flight fetch only stores
//!   its result if the generation it started under is still current, so a
//!   stale response can never clobber an optimistic overwrite.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::service::ServiceError;

/// Cache key derived from operation name and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    op: &'static str,
    param: Option<String>,
}

impl QueryKey {
    /// Key for a parameterless operation.
    pub fn of(op: &'static str) -> Self {
        Self { op, param: None }
    }

    /// Key for an operation applied to one parameter.
    pub fn with_param(op: &'static str, param: impl Into<String>) -> Self {
        Self {
            op,
            param: Some(param.into()),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}:{}", self.op, param),
            None => f.write_str(self.op),
        }
    }
}

/// How long a cached value counts as fresh, and how long it is retained at
/// all. Stale-but-retained values are served while a refresh runs.
#[derive(Debug, Clone, Copy)]
pub struct FreshnessPolicy {
    pub fresh_for: Duration,
    pub retain_for: Duration,
}

impl FreshnessPolicy {
    pub const fn new(fresh_for: Duration, retain_for: Duration) -> Self {
        Self {
            fresh_for,
            retain_for,
        }
    }
}

struct StoredValue {
    value: Arc<dyn Any + Send + Sync>,
    stored_at: Instant,
    stale: bool,
}

#[derive(Default)]
struct Slot {
    value: Option<StoredValue>,
    generation: u64,
}

enum Lookup<T> {
    Fresh(T),
    Stale(T),
}

struct CacheInner {
    slots: RwLock<HashMap<QueryKey, Slot>>,
    inflight: Mutex<HashMap<QueryKey, Arc<Mutex<()>>>>,
}

impl CacheInner {
    async fn lookup<T: Clone + 'static>(
        &self,
        key: &QueryKey,
        policy: FreshnessPolicy,
    ) -> Option<Lookup<T>> {
        let slots = self.slots.read().await;
        let stored = slots.get(key)?.value.as_ref()?;
        let age = stored.stored_at.elapsed();
        if age >= policy.retain_for {
            return None;
        }
        let value = stored.value.downcast_ref::<T>()?.clone();
        if stored.stale || age >= policy.fresh_for {
            Some(Lookup::Stale(value))
        } else {
            Some(Lookup::Fresh(value))
        }
    }

    async fn store_if_current<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
        generation: u64,
        value: T,
    ) {
        let mut slots = self.slots.write().await;
        let slot = slots.entry(key.clone()).or_default();
        if slot.generation != generation {
            tracing::debug!("dropping out-of-date response for {key}");
            return;
        }
        slot.value = Some(StoredValue {
            value: Arc::new(value),
            stored_at: Instant::now(),
            stale: false,
        });
    }

    async fn key_lock(&self, key: &QueryKey) -> Arc<Mutex<()>> {
        let mut inflight = self.inflight.lock().await;
        inflight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn generation(&self, key: &QueryKey) -> u64 {
        self.slots
            .read()
            .await
            .get(key)
            .map(|slot| slot.generation)
            .unwrap_or(0)
    }
}

/// Keyed cache shared by the client's query operations.
///
/// A cheap clonable handle; constructed once and injected. Holds only
/// transient copies of what the external service owns.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<CacheInner>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CacheInner {
                slots: RwLock::new(HashMap::new()),
                inflight: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Read through the cache.
    ///
    /// Returns the cached value when fresh; serves a retained stale value
    /// while refreshing it in the background; otherwise fetches in the
    /// foreground. Concurrent foreground fetches for one key are collapsed
    /// into a single request.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: QueryKey,
        policy: FreshnessPolicy,
        fetch: F,
    ) -> Result<T, ServiceError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ServiceError>> + Send + 'static,
    {
        match self.inner.lookup::<T>(&key, policy).await {
            Some(Lookup::Fresh(value)) => return Ok(value),
            Some(Lookup::Stale(value)) => {
                self.spawn_refresh(key, fetch).await;
                return Ok(value);
            }
            None => {}
        }

        let lock = self.inner.key_lock(&key).await;
        let _guard = lock.lock().await;

        // Another reader may have filled the slot while we queued on the lock.
        if let Some(Lookup::Fresh(value)) = self.inner.lookup::<T>(&key, policy).await {
            return Ok(value);
        }

        let generation = self.inner.generation(&key).await;
        let value = fetch().await?;
        self.inner
            .store_if_current(&key, generation, value.clone())
            .await;
        Ok(value)
    }

    /// Overwrite a key with a locally computed value.
    ///
    /// Bumps the generation first, so any fetch already in flight for this
    /// key will drop its response instead of clobbering the new value.
    pub async fn put<T: Send + Sync + 'static>(&self, key: &QueryKey, value: T) {
        let mut slots = self.inner.slots.write().await;
        let slot = slots.entry(key.clone()).or_default();
        slot.generation += 1;
        slot.value = Some(StoredValue {
            value: Arc::new(value),
            stored_at: Instant::now(),
            stale: false,
        });
    }

    /// Cancel in-flight fetches for a key without touching its value.
    pub async fn cancel(&self, key: &QueryKey) {
        let mut slots = self.inner.slots.write().await;
        slots.entry(key.clone()).or_default().generation += 1;
    }

    /// Mark a key stale so the next read reconciles with the source of truth.
    ///
    /// The value is kept and served while the refresh runs; it is not
    /// evicted.
    pub async fn invalidate(&self, key: &QueryKey) {
        let mut slots = self.inner.slots.write().await;
        let slot = slots.entry(key.clone()).or_default();
        slot.generation += 1;
        if let Some(stored) = &mut slot.value {
            stored.stale = true;
        }
    }

    /// Current cached value for a key, regardless of freshness.
    pub async fn peek<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let slots = self.inner.slots.read().await;
        let stored = slots.get(key)?.value.as_ref()?;
        stored.value.downcast_ref::<T>().cloned()
    }

    /// Drop every cached value, e.g. on sign-out.
    pub async fn clear(&self) {
        self.inner.slots.write().await.clear();
    }

    async fn spawn_refresh<T, F, Fut>(&self, key: QueryKey, fetch: F)
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ServiceError>> + Send + 'static,
    {
        let lock = self.inner.key_lock(&key).await;
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            // A refresh already running for this key covers us.
            let Ok(_guard) = lock.try_lock() else { return };
            let generation = inner.generation(&key).await;
            match fetch().await {
                Ok(value) => inner.store_if_current(&key, generation, value).await,
                Err(e) => tracing::debug!("background refresh for {key} failed: {e}"),
            }
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    const POLICY: FreshnessPolicy =
        FreshnessPolicy::new(Duration::from_secs(300), Duration::from_secs(1800));

    fn counting_fetch(
        counter: &Arc<AtomicUsize>,
        value: &str,
    ) -> impl FnOnce() -> std::future::Ready<Result<String, ServiceError>> {
        let counter = Arc::clone(counter);
        let value = value.to_string();
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(Ok(value))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fresh_value_is_not_refetched() {
        let cache = QueryCache::new();
        let key = QueryKey::of("currentUser");
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v1"))
            .await
            .unwrap();
        let second = cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v2"))
            .await
            .unwrap();

        assert_eq!(first, "v1");
        assert_eq!(second, "v1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_reads_share_one_request() {
        let cache = QueryCache::new();
        let key = QueryKey::of("currentUser");
        let calls = Arc::new(AtomicUsize::new(0));

        let slow_fetch = |value: &str| {
            let counter = Arc::clone(&calls);
            let value = value.to_string();
            move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(value)
            }
        };

        let a = tokio::spawn({
            let cache = cache.clone();
            let key = key.clone();
            let fetch = slow_fetch("v1");
            async move { cache.fetch(key, POLICY, fetch).await }
        });
        let b = tokio::spawn({
            let cache = cache.clone();
            let key = key.clone();
            let fetch = slow_fetch("v2");
            async move { cache.fetch(key, POLICY, fetch).await }
        });

        let first = a.await.unwrap().unwrap();
        let second = b.await.unwrap().unwrap();

        assert_eq!(first, "v1");
        assert_eq!(second, "v1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_value_served_while_refreshing() {
        let cache = QueryCache::new();
        let key = QueryKey::of("currentUser");
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v1"))
            .await
            .unwrap();

        // Past the freshness window, inside retention.
        tokio::time::advance(Duration::from_secs(600)).await;

        let served = cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v2"))
            .await
            .unwrap();
        assert_eq!(served, "v1");

        // Let the background refresh land.
        for _ in 0..50 {
            tokio::task::yield_now().await;
            if cache.peek::<String>(&key).await.as_deref() == Some("v2") {
                break;
            }
        }
        assert_eq!(cache.peek::<String>(&key).await.as_deref(), Some("v2"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_value_is_refetched_in_foreground() {
        let cache = QueryCache::new();
        let key = QueryKey::of("currentUser");
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v1"))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(3600)).await;

        let value = cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v2"))
            .await
            .unwrap();
        assert_eq!(value, "v2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_wins_over_inflight_fetch() {
        let cache = QueryCache::new();
        let key = QueryKey::of("currentUser");
        let gate = Arc::new(Notify::new());

        let task = tokio::spawn({
            let cache = cache.clone();
            let key = key.clone();
            let gate = Arc::clone(&gate);
            async move {
                cache
                    .fetch(key, POLICY, move || async move {
                        gate.notified().await;
                        Ok("server".to_string())
                    })
                    .await
            }
        });

        // Let the fetch start, then overwrite optimistically.
        tokio::task::yield_now().await;
        cache.put(&key, "optimistic".to_string()).await;
        gate.notify_one();

        // The fetch still resolves for its caller, but its response must not
        // clobber the optimistic value.
        let fetched = task.await.unwrap().unwrap();
        assert_eq!(fetched, "server");
        assert_eq!(
            cache.peek::<String>(&key).await.as_deref(),
            Some("optimistic")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_keeps_value_but_forces_refresh() {
        let cache = QueryCache::new();
        let key = QueryKey::of("currentUser");
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v1"))
            .await
            .unwrap();
        cache.invalidate(&key).await;

        // Value is retained for immediate display.
        assert_eq!(cache.peek::<String>(&key).await.as_deref(), Some("v1"));

        // But the next read refreshes it.
        let served = cache
            .fetch(key.clone(), POLICY, counting_fetch(&calls, "v2"))
            .await
            .unwrap();
        assert_eq!(served, "v1");
        for _ in 0..50 {
            tokio::task::yield_now().await;
            if cache.peek::<String>(&key).await.as_deref() == Some("v2") {
                break;
            }
        }
        assert_eq!(cache.peek::<String>(&key).await.as_deref(), Some("v2"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_drops_everything() {
        let cache = QueryCache::new();
        let key = QueryKey::with_param("profile", "abc");
        cache.put(&key, "value".to_string()).await;
        cache.clear().await;
        assert_eq!(cache.peek::<String>(&key).await, None);
    }
}
