//! Cluster topic classification by keyword presence.

use tassel_core::models::ClusterType;
use tassel_core::review::ProcessedReview;

const TEACHING_KEYWORDS: &[&str] = &[
    "lecture", "teach", "explain", "instructor", "slides", "examples",
    "engaging", "boring", "confusing", "clear", "office hours",
];

const EXAMS_KEYWORDS: &[&str] = &[
    "exam", "test", "midterm", "final", "quiz", "study guide", "multiple choice",
];

const GRADING_KEYWORDS: &[&str] = &[
    "grade", "grading", "curve", "rubric", "partial credit", "harsh", "lenient", "gpa",
];

const WORKLOAD_KEYWORDS: &[&str] = &[
    "workload", "homework", "assignment", "project", "busywork",
    "hours a week", "time consuming", "reading", "lab",
];

const PERSONALITY_KEYWORDS: &[&str] = &[
    "nice", "rude", "funny", "caring", "arrogant", "helpful", "friendly",
    "approachable", "condescending", "passionate",
];

const POLICIES_KEYWORDS: &[&str] = &[
    "attendance", "policy", "late work", "extension", "absence", "makeup",
    "syllabus", "deadline", "extra credit",
];

fn keywords_for(cluster_type: ClusterType) -> &'static [&'static str] {
    match cluster_type {
        ClusterType::Teaching => TEACHING_KEYWORDS,
        ClusterType::Exams => EXAMS_KEYWORDS,
        ClusterType::Grading => GRADING_KEYWORDS,
        ClusterType::Workload => WORKLOAD_KEYWORDS,
        ClusterType::Personality => PERSONALITY_KEYWORDS,
        ClusterType::Policies => POLICIES_KEYWORDS,
        ClusterType::Other => &[],
    }
}

/// Classify a cluster by its members' combined text.
///
/// Each category scores the number of its keywords present as substrings
/// of the lowercased text; the highest score wins, ties breaking in
/// declaration order. All-zero scores type the cluster `Other`.
pub fn classify_cluster(reviews: &[ProcessedReview]) -> ClusterType {
    let text = reviews
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut best = ClusterType::Other;
    let mut best_score = 0usize;
    for cluster_type in ClusterType::ALL {
        let score = keywords_for(cluster_type)
            .iter()
            .filter(|kw| text.contains(*kw))
            .count();
        if score > best_score {
            best = cluster_type;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(text: &str) -> ProcessedReview {
        ProcessedReview {
            review_id: "r".to_string(),
            professor_id: "p".to_string(),
            course_code: "CSCE221".to_string(),
            text: text.to_string(),
            original_text: text.to_string(),
            word_count: text.split_whitespace().count(),
        }
    }

    #[test]
    fn exam_heavy_text_classifies_as_exams() {
        let reviews = vec![
            review("The midterm was rough and the final even worse"),
            review("Every exam had a surprise quiz section"),
        ];
        assert_eq!(classify_cluster(&reviews), ClusterType::Exams);
    }

    #[test]
    fn teaching_text_classifies_as_teaching() {
        let reviews = vec![review(
            "Lectures were clear, the slides had worked examples, very engaging instructor",
        )];
        assert_eq!(classify_cluster(&reviews), ClusterType::Teaching);
    }

    #[test]
    fn policy_text_classifies_as_policies() {
        let reviews = vec![review(
            "Strict attendance policy, no late work, no extensions, no makeup exams either",
        )];
        // "attendance", "policy", "late work", "extension", "makeup" beat
        // the single exam keyword.
        assert_eq!(classify_cluster(&reviews), ClusterType::Policies);
    }

    #[test]
    fn unmatched_text_falls_back_to_other() {
        let reviews = vec![review("completely unrelated rambling about cafeteria food")];
        assert_eq!(classify_cluster(&reviews), ClusterType::Other);
    }

    #[test]
    fn empty_cluster_is_other() {
        assert_eq!(classify_cluster(&[]), ClusterType::Other);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let reviews = vec![review("HOMEWORK and PROJECT load was a heavy WORKLOAD")];
        assert_eq!(classify_cluster(&reviews), ClusterType::Workload);
    }
}
