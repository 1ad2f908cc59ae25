use std::fmt;

use serde::{Deserialize, Serialize};

/// Topic category of a review cluster.
///
/// Closed set — exhaustive matches everywhere keep new categories from
/// slipping in as bare strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterType {
    Teaching,
    Exams,
    Grading,
    Workload,
    Personality,
    Policies,
    Other,
}

impl ClusterType {
    /// Every category, in classification tie-break order.
    pub const ALL: [ClusterType; 7] = [
        ClusterType::Teaching,
        ClusterType::Exams,
        ClusterType::Grading,
        ClusterType::Workload,
        ClusterType::Personality,
        ClusterType::Policies,
        ClusterType::Other,
    ];

    /// The five opinion fields scanned during professor aggregation.
    /// `Policies` and `Other` carry facts, not opinions, and are skipped.
    pub const OPINION_FIELDS: [ClusterType; 5] = [
        ClusterType::Teaching,
        ClusterType::Exams,
        ClusterType::Grading,
        ClusterType::Workload,
        ClusterType::Personality,
    ];

    /// Capitalized field label, e.g. `"Teaching"`.
    pub fn label(self) -> &'static str {
        match self {
            ClusterType::Teaching => "Teaching",
            ClusterType::Exams => "Exams",
            ClusterType::Grading => "Grading",
            ClusterType::Workload => "Workload",
            ClusterType::Personality => "Personality",
            ClusterType::Policies => "Policies",
            ClusterType::Other => "Other",
        }
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClusterType::Teaching => "teaching",
            ClusterType::Exams => "exams",
            ClusterType::Grading => "grading",
            ClusterType::Workload => "workload",
            ClusterType::Personality => "personality",
            ClusterType::Policies => "policies",
            ClusterType::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// Aggregate sentiment of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Mixed,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Mixed => "mixed",
        };
        write!(f, "{s}")
    }
}
