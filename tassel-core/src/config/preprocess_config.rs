use serde::{Deserialize, Serialize};

use super::defaults;

/// Review preprocessor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Reviews below this cleaned word count are dropped as noise.
    pub min_word_count: usize,
    /// Cosine similarity threshold for near-duplicate exclusion.
    pub dedup_threshold: f64,
    /// Enable near-duplicate removal.
    pub deduplicate: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            min_word_count: defaults::DEFAULT_MIN_WORD_COUNT,
            dedup_threshold: defaults::DEFAULT_DEDUP_THRESHOLD,
            deduplicate: defaults::DEFAULT_DEDUPLICATE,
        }
    }
}
