//! Route resolution caching
//!
//! Caches pathname lookups so repeated resolutions of the same location skip
//! the linear scan, with LRU eviction. Only the pathname keys the cache - the
//! query string is re-parsed on every resolve - and every registration clears
//! the cache so late-added routes are always visible.

use crate::registry::ResolvedRoute;
use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache performance statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub invalidations: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Pathname-keyed resolution cache with LRU eviction
///
/// Default capacity: 1000 entries.
#[derive(Debug)]
pub struct ResolveCache {
    entries: LruCache<String, ResolvedRoute>,
    stats: CacheStats,
}

impl ResolveCache {
    const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).expect("Cache capacity must be non-zero");
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Look up a previously resolved pathname.
    pub fn lookup(&mut self, pathname: &str) -> Option<ResolvedRoute> {
        match self.entries.get(pathname) {
            Some(resolved) => {
                self.stats.hits += 1;
                Some(resolved.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Remember a resolved pathname.
    pub fn store(&mut self, pathname: &str, resolved: ResolvedRoute) {
        self.entries.put(pathname.to_string(), resolved);
    }

    /// Drop every entry. Called whenever the route table changes.
    pub fn clear(&mut self) {
        trace_log!("Clearing resolve cache");
        self.entries.clear();
        self.stats.invalidations += 1;
    }

    /// Current statistics snapshot.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of cached pathnames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self::new()
    }
}
