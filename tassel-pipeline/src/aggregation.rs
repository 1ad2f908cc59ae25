//! Course- and professor-level aggregation of cluster summaries.

use tassel_core::constants::{MAX_OPINION_ENTRIES, OPINION_SNIPPET_CHARS};
use tassel_core::models::{
    ClusterSummary, ClusterType, Confidence, CourseSummary, ProfessorSummary,
};
use tassel_summarize::sentiment::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
use tracing::warn;

/// Roll a course's cluster summaries into one `CourseSummary`.
///
/// Each category slot takes the summary of the cluster with that type;
/// when two clusters share a type the later one wins (last-write-wins).
/// `total_reviews` counts every summarized cluster, displaced ones
/// included — they did feed the course.
pub fn aggregate_course(course: &str, summaries: &[ClusterSummary]) -> CourseSummary {
    let mut result = CourseSummary::new(course);
    for cluster in summaries {
        if result
            .set_summary(cluster.cluster_type, cluster.summary.clone())
            .is_some()
        {
            warn!(
                course,
                cluster_type = %cluster.cluster_type,
                review_count = cluster.review_count,
                "duplicate cluster type in course, overwriting earlier summary"
            );
        }
        result.total_reviews += cluster.review_count;
    }
    let confidences: Vec<Confidence> = summaries.iter().map(|s| s.confidence).collect();
    result.confidence = Confidence::mean(&confidences);
    result
}

/// Roll course summaries into the professor-level summary.
pub fn aggregate_professor(
    professor_id: &str,
    course_summaries: Vec<CourseSummary>,
) -> ProfessorSummary {
    if course_summaries.is_empty() {
        return ProfessorSummary::empty(professor_id);
    }

    let mut strengths = Vec::new();
    let mut complaints = Vec::new();
    for course in &course_summaries {
        for field in ClusterType::OPINION_FIELDS {
            let Some(text) = course.summary_for(field) else {
                continue;
            };
            let (positive, negative) = opinion_hits(text);
            if positive > negative && strengths.len() < MAX_OPINION_ENTRIES {
                strengths.push(format!("{}: {}", field.label(), snippet(text)));
            } else if negative > positive && complaints.len() < MAX_OPINION_ENTRIES {
                complaints.push(format!("{}: {}", field.label(), snippet(text)));
            }
        }
    }

    let overall_sentiment = if strengths.len() as f64 > complaints.len() as f64 * 1.5 {
        "Generally positive"
    } else if complaints.len() as f64 > strengths.len() as f64 * 1.5 {
        "Generally negative"
    } else {
        "Mixed - varies by course"
    }
    .to_string();

    let consistency = match course_summaries.len() {
        1 => "Single course data available",
        2..=3 => "Limited course data - patterns emerging",
        _ => "Patterns consistent across multiple courses",
    }
    .to_string();

    let confidences: Vec<Confidence> =
        course_summaries.iter().map(|c| c.confidence).collect();

    ProfessorSummary {
        professor_id: professor_id.to_string(),
        overall_sentiment,
        strengths,
        complaints,
        consistency,
        confidence: Confidence::mean(&confidences),
        course_summaries,
    }
}

/// Positive/negative keyword hits in a summary text.
fn opinion_hits(text: &str) -> (usize, usize) {
    let lowered = text.to_lowercase();
    let positive = POSITIVE_KEYWORDS
        .iter()
        .map(|kw| lowered.matches(kw).count())
        .sum();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .map(|kw| lowered.matches(kw).count())
        .sum();
    (positive, negative)
}

/// First 100 characters of a summary, on a char boundary.
fn snippet(text: &str) -> String {
    text.chars().take(OPINION_SNIPPET_CHARS).collect()
}
