//! Explicit memoization for loaded tables.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Key-addressed memo of expensive-to-build values.
///
/// `get_or_compute` runs the closure under the map lock, so a given key
/// computes at most once per process even with concurrent callers; later
/// calls share the first result. Suits values that are cheap to share and
/// costly to rebuild, like parsed exports.
#[derive(Debug)]
pub struct TableCache<K, V> {
    entries: Mutex<BTreeMap<K, Arc<V>>>,
}

impl<K, V> TableCache<K, V> {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<K: Ord, V> TableCache<K, V> {
    /// Returns the value for `key`, computing and storing it on first use.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = entries.get(&key) {
            return Arc::clone(value);
        }
        let value = Arc::new(compute());
        entries.insert(key, Arc::clone(&value));
        value
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached value; the next request recomputes.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<K, V> Default for TableCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_computes_once_per_key() {
        let cache: TableCache<&str, String> = TableCache::new();
        let calls = AtomicUsize::new(0);

        let first = cache.get_or_compute("benin", || {
            calls.fetch_add(1, Ordering::SeqCst);
            "loaded".to_string()
        });
        let second = cache.get_or_compute("benin", || {
            calls.fetch_add(1, Ordering::SeqCst);
            "loaded again".to_string()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*first, "loaded");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_keys_compute_separately() {
        let cache: TableCache<u32, u32> = TableCache::new();
        assert_eq!(*cache.get_or_compute(1, || 10), 10);
        assert_eq!(*cache.get_or_compute(2, || 20), 20);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let cache: TableCache<u32, u32> = TableCache::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            7
        };
        cache.get_or_compute(1, compute);
        cache.clear();
        assert!(cache.is_empty());
        cache.get_or_compute(1, compute);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
