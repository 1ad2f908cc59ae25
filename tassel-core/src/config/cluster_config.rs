use serde::{Deserialize, Serialize};

use super::defaults;

/// Semantic clusterer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Course partitions smaller than this become one cluster directly.
    pub min_reviews_for_clustering: usize,
    /// Minimum cluster size for HDBSCAN.
    pub min_cluster_size: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            min_reviews_for_clustering: defaults::DEFAULT_MIN_REVIEWS_FOR_CLUSTERING,
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
        }
    }
}
