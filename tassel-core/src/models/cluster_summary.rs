use serde::{Deserialize, Serialize};

use super::{ClusterType, Confidence, Sentiment};

/// Compressed summary of one topic cluster.
///
/// Recomputed on every pipeline run — there is no incremental update.
/// `source_review_ids` preserves traceability from summary back to the
/// reviews that fed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_type: ClusterType,
    pub summary: String,
    pub review_count: usize,
    pub sentiment: Sentiment,
    pub confidence: Confidence,
    pub source_review_ids: Vec<String>,
}
