//! Tiered embedding cache.
//!
//! L1 is an in-memory moka cache; L2 is a durable SQLite table. Both are
//! append-only from the pipeline's point of view — values are
//! deterministic per key, so a concurrent double-write is idempotent.

mod l1_memory;
mod l2_sqlite;

pub use l1_memory::L1MemoryCache;
pub use l2_sqlite::L2SqliteCache;

use tassel_core::errors::CacheError;
use tassel_core::traits::IEmbeddingCache;
use tracing::debug;

/// Coordinates the L1/L2 cache tiers.
///
/// Reads check L1 first and promote L2 hits into L1; writes go through to
/// both tiers.
pub struct CacheCoordinator {
    l1: L1MemoryCache,
    l2: Option<L2SqliteCache>,
}

impl CacheCoordinator {
    /// In-memory-only coordinator.
    pub fn new(l1_max_entries: u64) -> Self {
        Self {
            l1: L1MemoryCache::new(l1_max_entries),
            l2: None,
        }
    }

    /// Coordinator with a durable L2 tier at the given path.
    pub fn with_durable(l1_max_entries: u64, path: &str) -> Result<Self, CacheError> {
        Ok(Self {
            l1: L1MemoryCache::new(l1_max_entries),
            l2: Some(L2SqliteCache::open(path)?),
        })
    }

    /// Whether a durable tier is attached.
    pub fn is_durable(&self) -> bool {
        self.l2.is_some()
    }
}

impl IEmbeddingCache for CacheCoordinator {
    fn get(&self, key: &str) -> Option<Vec<f32>> {
        if let Some(vec) = self.l1.get(key) {
            return Some(vec);
        }
        if let Some(l2) = &self.l2 {
            if let Some(vec) = l2.get(key) {
                debug!(key, "L2 hit, promoting to L1");
                self.l1.insert(key.to_string(), vec.clone());
                return Some(vec);
            }
        }
        None
    }

    fn put(&self, key: &str, embedding: &[f32]) {
        self.l1.insert(key.to_string(), embedding.to_vec());
        if let Some(l2) = &self.l2 {
            l2.insert(key, embedding);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_only_round_trip() {
        let cache = CacheCoordinator::new(16);
        cache.put("k1", &[1.0, 2.0]);
        assert_eq!(cache.get("k1"), Some(vec![1.0, 2.0]));
        assert_eq!(cache.get("k2"), None);
        assert!(!cache.is_durable());
    }

    #[test]
    fn durable_tier_survives_l1_loss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("embeddings.db");
        let path = path.to_str().unwrap();

        let cache = CacheCoordinator::with_durable(16, path).unwrap();
        cache.put("k1", &[0.5, -0.5]);
        drop(cache);

        // A fresh coordinator has a cold L1 but reads the durable tier.
        let cache = CacheCoordinator::with_durable(16, path).unwrap();
        assert_eq!(cache.get("k1"), Some(vec![0.5, -0.5]));
    }
}
