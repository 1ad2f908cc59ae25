//! Pipeline configuration.
//!
//! One struct per subsystem, all fields defaulted so a partial TOML
//! document (or none at all) yields a working pipeline.

pub mod defaults;

mod cluster_config;
mod embedding_config;
mod preprocess_config;
mod summary_config;

pub use cluster_config::ClusterConfig;
pub use embedding_config::EmbeddingConfig;
pub use preprocess_config::PreprocessConfig;
pub use summary_config::SummaryConfig;

use serde::{Deserialize, Serialize};

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub preprocess: PreprocessConfig,
    pub embedding: EmbeddingConfig,
    pub cluster: ClusterConfig,
    pub summary: SummaryConfig,
}

impl PipelineConfig {
    /// Parse a TOML document; absent sections and fields take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_usable() {
        let config = PipelineConfig::default();
        assert_eq!(config.preprocess.min_word_count, defaults::DEFAULT_MIN_WORD_COUNT);
        assert_eq!(config.cluster.min_cluster_size, defaults::DEFAULT_MIN_CLUSTER_SIZE);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = PipelineConfig::from_toml_str(
            r#"
            [preprocess]
            min_word_count = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.preprocess.min_word_count, 10);
        assert_eq!(
            config.preprocess.dedup_threshold,
            defaults::DEFAULT_DEDUP_THRESHOLD
        );
        assert_eq!(
            config.summary.max_input_chars,
            defaults::DEFAULT_MAX_INPUT_CHARS
        );
    }

    #[test]
    fn empty_toml_is_default() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(
            config.embedding.dimensions,
            defaults::DEFAULT_EMBEDDING_DIMENSIONS
        );
    }
}
