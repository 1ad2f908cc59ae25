use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CLUSTER_CONFIDENCE;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how well-supported a summary is by its source reviews.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Cluster confidence from supporting review count:
    /// `min(0.95, 0.5 + (n/20) * 0.45)`. Monotone in `n`, capped.
    pub fn from_review_count(review_count: usize) -> Self {
        let raw = 0.5 + (review_count as f64 / 20.0) * 0.45;
        Self(raw.min(MAX_CLUSTER_CONFIDENCE))
    }

    /// Mean of a set of confidences. Zero for an empty set.
    pub fn mean(values: &[Confidence]) -> Self {
        if values.is_empty() {
            return Self(0.0);
        }
        let sum: f64 = values.iter().map(|c| c.0).sum();
        Self::new(sum / values.len() as f64)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
