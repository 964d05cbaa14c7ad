//! Main-component cache
//!
//! Instances sharing a component are usually siblings, so one traversal asks
//! the host for the same reference many times. The cache keeps each answer
//! (including "not found") for a fixed lifetime, checked on read.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tidy_scene::{MainComponent, NodeId};
use tokio::time::Instant;

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Entries currently stored (live or expired)
    pub entry_count: usize,
    /// Reads answered from the cache
    pub hits: u64,
    /// Reads that had to go to the host
    pub misses: u64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Option<MainComponent>,
    expires_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<NodeId, CacheEntry>,
    hits: u64,
    misses: u64,
}

/// Instance id → main component, with a time-to-live
#[derive(Debug)]
pub struct MainComponentCache {
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl MainComponentCache {
    /// Create cache with the given entry lifetime
    #[inline]
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Entry lifetime
    #[inline]
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached answer for `instance`
    ///
    /// The outer `Option` is the cache hit; the inner one is the host's
    /// answer (`None` = no main component).
    #[must_use]
    pub fn get(&self, instance: &NodeId) -> Option<Option<MainComponent>> {
        let now = Instant::now();
        let mut state = self.state.lock();
        let hit = state
            .entries
            .get(instance)
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.value.clone());

        match hit {
            Some(_) => state.hits += 1,
            None => state.misses += 1,
        }
        hit
    }

    /// Store the host's answer for `instance`
    pub fn insert(&self, instance: NodeId, value: Option<MainComponent>) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.state.lock().entries.insert(instance, entry);
    }

    /// Return the cached answer or fetch and store a fresh one
    ///
    /// Failed fetches are not cached.
    ///
    /// # Errors
    /// Propagates the fetch error.
    pub async fn get_or_fetch<E, F, Fut>(
        &self,
        instance: &NodeId,
        fetch: F,
    ) -> Result<Option<MainComponent>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<MainComponent>, E>>,
    {
        if let Some(cached) = self.get(instance) {
            return Ok(cached);
        }

        let value = fetch().await?;
        self.insert(instance.clone(), value.clone());
        Ok(value)
    }

    /// Drop one entry
    pub fn invalidate(&self, instance: &NodeId) {
        self.state.lock().entries.remove(instance);
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }

    /// Drop expired entries, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut state = self.state.lock();
        let before = state.entries.len();
        state.entries.retain(|_, entry| now < entry.expires_at);
        before - state.entries.len()
    }

    /// Number of stored entries (live or expired)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Whether nothing is stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of cache statistics
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            entry_count: state.entries.len(),
            hits: state.hits,
            misses: state.misses,
        }
    }
}

impl Default for MainComponentCache {
    /// Five-second lifetime
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn component(name: &str) -> MainComponent {
        MainComponent {
            id: NodeId::new("9:1"),
            name: name.to_string(),
            parent: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn entry_lives_until_ttl() {
        let cache = MainComponentCache::default();
        let id = NodeId::new("1:1");
        cache.insert(id.clone(), Some(component("Card")));

        tokio::time::advance(Duration::from_millis(4_999)).await;
        assert_eq!(cache.get(&id), Some(Some(component("Card"))));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(cache.get(&id), None);
    }

    #[tokio::test(start_paused = true)]
    async fn get_or_fetch_hits_host_once_per_ttl() {
        let cache = MainComponentCache::new(Duration::from_secs(5));
        let id = NodeId::new("1:1");
        let counter = AtomicUsize::new(0);
        let calls = &counter;

        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, std::convert::Infallible>(Some(component("Card")))
        };

        for _ in 0..3 {
            let value = cache.get_or_fetch(&id, fetch).await.unwrap();
            assert_eq!(value.unwrap().name, "Card");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(6)).await;
        cache.get_or_fetch(&id, fetch).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 2);
    }

    #[tokio::test]
    async fn absent_component_is_cached() {
        let cache = MainComponentCache::default();
        let id = NodeId::new("1:1");

        let value = cache
            .get_or_fetch(&id, || async { Ok::<_, ()>(None) })
            .await
            .unwrap();
        assert!(value.is_none());
        assert_eq!(cache.get(&id), Some(None));
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = MainComponentCache::default();
        let id = NodeId::new("1:1");

        let result = cache
            .get_or_fetch(&id, || async { Err::<Option<MainComponent>, _>("offline") })
            .await;
        assert_eq!(result, Err("offline"));
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn purge_and_invalidate() {
        let cache = MainComponentCache::new(Duration::from_secs(1));
        cache.insert(NodeId::new("a"), None);
        cache.insert(NodeId::new("b"), None);

        cache.invalidate(&NodeId::new("a"));
        assert_eq!(cache.len(), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        cache.insert(NodeId::new("c"), None);
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
