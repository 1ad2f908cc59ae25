//! L1 in-memory cache using moka.

use moka::sync::Cache;

/// L1 in-memory embedding cache.
///
/// Keys are blake3 review-id hashes. Values are embedding vectors.
/// Capacity-bounded; the durable L2 tier is the source of record.
pub struct L1MemoryCache {
    cache: Cache<String, Vec<f32>>,
}

impl L1MemoryCache {
    /// Create a new L1 cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Get an embedding by key.
    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    /// Insert an embedding.
    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = L1MemoryCache::new(100);
        cache.insert("abc".to_string(), vec![1.0, 2.0, 3.0]);
        assert_eq!(cache.get("abc"), Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = L1MemoryCache::new(100);
        assert_eq!(cache.get("nonexistent"), None);
    }
}
