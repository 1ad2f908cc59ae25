use serde::{Deserialize, Serialize};

use super::{ClusterType, Confidence};

/// Per-course rollup: up to one summary text per topic category.
///
/// Written to the persistence layer as an idempotent replace keyed by
/// `(professor_id, course)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseSummary {
    /// Canonical course code.
    pub course: String,
    pub teaching: Option<String>,
    pub exams: Option<String>,
    pub grading: Option<String>,
    pub workload: Option<String>,
    pub personality: Option<String>,
    pub policies: Option<String>,
    pub other: Option<String>,
    /// Mean of the feeding cluster confidences.
    pub confidence: Confidence,
    /// Sum of the feeding clusters' review counts.
    pub total_reviews: usize,
}

impl CourseSummary {
    /// Empty summary for a course.
    pub fn new(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            ..Self::default()
        }
    }

    /// The summary slot for a category.
    pub fn summary_for(&self, cluster_type: ClusterType) -> Option<&str> {
        let slot = match cluster_type {
            ClusterType::Teaching => &self.teaching,
            ClusterType::Exams => &self.exams,
            ClusterType::Grading => &self.grading,
            ClusterType::Workload => &self.workload,
            ClusterType::Personality => &self.personality,
            ClusterType::Policies => &self.policies,
            ClusterType::Other => &self.other,
        };
        slot.as_deref()
    }

    /// Set the summary slot for a category, returning the previous value.
    pub fn set_summary(&mut self, cluster_type: ClusterType, text: String) -> Option<String> {
        let slot = match cluster_type {
            ClusterType::Teaching => &mut self.teaching,
            ClusterType::Exams => &mut self.exams,
            ClusterType::Grading => &mut self.grading,
            ClusterType::Workload => &mut self.workload,
            ClusterType::Personality => &mut self.personality,
            ClusterType::Policies => &mut self.policies,
            ClusterType::Other => &mut self.other,
        };
        slot.replace(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_summary_returns_displaced_value() {
        let mut cs = CourseSummary::new("CSCE221");
        assert!(cs.set_summary(ClusterType::Exams, "hard exams".into()).is_none());
        let previous = cs.set_summary(ClusterType::Exams, "fair exams".into());
        assert_eq!(previous.as_deref(), Some("hard exams"));
        assert_eq!(cs.summary_for(ClusterType::Exams), Some("fair exams"));
    }

    #[test]
    fn slots_are_independent() {
        let mut cs = CourseSummary::new("CSCE221");
        cs.set_summary(ClusterType::Teaching, "clear lectures".into());
        assert!(cs.summary_for(ClusterType::Grading).is_none());
        assert_eq!(cs.summary_for(ClusterType::Teaching), Some("clear lectures"));
    }
}
