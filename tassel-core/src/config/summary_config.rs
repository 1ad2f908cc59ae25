use serde::{Deserialize, Serialize};

use super::defaults;

/// Hierarchical summarizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Safe input bound (characters) for one generative call.
    pub max_input_chars: usize,
    /// Maximum output tokens requested from the generative provider.
    pub max_summary_tokens: usize,
    /// Minimum output tokens requested from the generative provider.
    pub min_summary_tokens: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_input_chars: defaults::DEFAULT_MAX_INPUT_CHARS,
            max_summary_tokens: defaults::DEFAULT_MAX_SUMMARY_TOKENS,
            min_summary_tokens: defaults::DEFAULT_MIN_SUMMARY_TOKENS,
        }
    }
}
