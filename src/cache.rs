use std::hash::Hash;
use std::time::{Duration, Instant};

use dashmap::DashMap;

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Read-through memoisation for one function, keyed by its argument tuple.
///
/// With `ttl == None` every key is computed once. Otherwise an entry older than `ttl` is
/// recomputed the next time it is requested.
pub struct MemoCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    ttl: Option<Duration>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Option<Duration>) -> MemoCache<K, V> {
        MemoCache {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &CacheEntry<V>) -> bool {
        match self.ttl {
            Some(ttl) => entry.inserted_at.elapsed() < ttl,
            None => true,
        }
    }

    /// Returns the cached value if present and fresh.
    pub fn get(&self, key: &K) -> Option<V> {
        let entry = self.entries.get(key)?;
        if self.is_fresh(&entry) {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }

        let value = compute();
        self.insert(key, value.clone());
        value
    }

    /// Like `get_or_insert_with`, but a failed computation leaves the cache untouched.
    pub fn get_or_try_insert_with<F, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = compute()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    fn insert(&self, key: K, value: V) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drops every expired entry. Returns how many were removed.
    pub fn evict_expired(&self) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };

        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let fresh = entry.inserted_at.elapsed() < ttl;
            if !fresh {
                removed += 1;
            }
            fresh
        });
        removed
    }
}
