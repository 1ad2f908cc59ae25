use serde::{Deserialize, Serialize};

use super::{Confidence, CourseSummary};

/// Top-level output of one pipeline run.
///
/// Written to the persistence layer as an idempotent replace keyed by
/// `professor_id`; stale course rows are deleted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessorSummary {
    pub professor_id: String,
    pub overall_sentiment: String,
    /// At most 5 entries, `"{Field}: {snippet}"`.
    pub strengths: Vec<String>,
    /// At most 5 entries, `"{Field}: {snippet}"`.
    pub complaints: Vec<String>,
    /// Categorical label describing how much course data backs the summary.
    pub consistency: String,
    /// Mean of the course-summary confidences.
    pub confidence: Confidence,
    /// Ordered by course code.
    pub course_summaries: Vec<CourseSummary>,
}

impl ProfessorSummary {
    /// Well-formed summary for a professor with no usable reviews.
    pub fn empty(professor_id: impl Into<String>) -> Self {
        Self {
            professor_id: professor_id.into(),
            overall_sentiment: "No reviews available".to_string(),
            strengths: Vec::new(),
            complaints: Vec::new(),
            consistency: String::new(),
            confidence: Confidence::default(),
            course_summaries: Vec::new(),
        }
    }
}
