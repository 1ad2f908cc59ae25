use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Dimensionality expected from the provider.
    pub dimensions: usize,
    /// Max entries in the L1 in-memory cache.
    pub l1_cache_size: u64,
    /// Path of the durable L2 cache database. None = in-memory only.
    pub cache_path: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            cache_path: None,
        }
    }
}
