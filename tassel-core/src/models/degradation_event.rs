use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a soft fallback taken somewhere in the pipeline.
///
/// Emitted when a capability call fails and a degraded path is used
/// instead (dedup skipped, extractive summary, single-cluster fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Component that degraded, e.g. "preprocess" or "summarize".
    pub component: String,
    /// What failed.
    pub failure: String,
    /// The fallback that was used instead.
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

impl DegradationEvent {
    pub fn now(component: &str, failure: impl Into<String>, fallback_used: &str) -> Self {
        Self {
            component: component.to_string(),
            failure: failure.into(),
            fallback_used: fallback_used.to_string(),
            timestamp: Utc::now(),
        }
    }
}
