//! Per-course clustering.

use std::collections::BTreeMap;

use hdbscan::{Hdbscan, HdbscanHyperParams};
use tassel_core::config::ClusterConfig;
use tassel_core::models::DegradationEvent;
use tassel_core::review::ProcessedReview;
use tracing::{debug, info, warn};

/// One topic cluster within a course.
#[derive(Debug, Clone)]
pub struct CourseCluster {
    /// HDBSCAN label, or 0 for the small-partition fallback cluster.
    pub cluster_id: i32,
    /// Members in input order.
    pub reviews: Vec<ProcessedReview>,
}

/// Result of the clustering stage.
pub struct ClusterOutcome {
    /// Clusters per canonical course code, ordered by course then label.
    pub by_course: BTreeMap<String, Vec<CourseCluster>>,
    /// Reviews labeled noise and dropped from summarization.
    pub noise_count: usize,
    /// Soft fallbacks taken (HDBSCAN failures).
    pub events: Vec<DegradationEvent>,
}

/// Cluster reviews within each course partition.
///
/// `vectors` is parallel to `reviews`. Partitions below
/// `min_reviews_for_clustering` become one cluster without invoking the
/// clustering algorithm; an HDBSCAN failure degrades the same way.
pub fn cluster_by_course(
    reviews: &[ProcessedReview],
    vectors: &[Vec<f32>],
    config: &ClusterConfig,
) -> ClusterOutcome {
    let mut outcome = ClusterOutcome {
        by_course: BTreeMap::new(),
        noise_count: 0,
        events: Vec::new(),
    };

    for (course, indices) in partition_by_course(reviews) {
        if indices.len() < config.min_reviews_for_clustering {
            debug!(
                course = %course,
                reviews = indices.len(),
                "partition below clustering minimum, single cluster"
            );
            outcome
                .by_course
                .insert(course, vec![collect_cluster(0, &indices, reviews)]);
            continue;
        }

        let features: Vec<Vec<f32>> = indices.iter().map(|&i| vectors[i].clone()).collect();
        let hyper_params = HdbscanHyperParams::builder()
            .min_cluster_size(config.min_cluster_size)
            .min_samples(1)
            .build();
        let clusterer = Hdbscan::new(&features, hyper_params);

        let clusters = match clusterer.cluster() {
            Ok(labels) => {
                let mut by_label: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
                for (pos, &label) in labels.iter().enumerate() {
                    if label < 0 {
                        outcome.noise_count += 1;
                    } else {
                        by_label.entry(label).or_default().push(indices[pos]);
                    }
                }
                by_label
                    .into_iter()
                    .map(|(label, members)| collect_cluster(label, &members, reviews))
                    .collect()
            }
            Err(e) => {
                warn!(course = %course, error = ?e, "clustering failed, single cluster fallback");
                outcome.events.push(DegradationEvent::now(
                    "cluster",
                    format!("hdbscan failed for {course}: {e:?}"),
                    "single cluster fallback",
                ));
                vec![collect_cluster(0, &indices, reviews)]
            }
        };
        outcome.by_course.insert(course, clusters);
    }

    info!(
        courses = outcome.by_course.len(),
        noise = outcome.noise_count,
        "clustering complete"
    );
    outcome
}

/// One cluster per course, no clustering at all.
///
/// Degraded path used when no embeddings are available: summaries still
/// get produced, at extractive quality.
pub fn single_cluster_per_course(reviews: &[ProcessedReview]) -> ClusterOutcome {
    let by_course = partition_by_course(reviews)
        .into_iter()
        .map(|(course, indices)| (course, vec![collect_cluster(0, &indices, reviews)]))
        .collect();
    ClusterOutcome {
        by_course,
        noise_count: 0,
        events: Vec::new(),
    }
}

fn partition_by_course(reviews: &[ProcessedReview]) -> BTreeMap<String, Vec<usize>> {
    let mut partitions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, review) in reviews.iter().enumerate() {
        partitions
            .entry(review.course_code.clone())
            .or_default()
            .push(i);
    }
    partitions
}

fn collect_cluster(label: i32, indices: &[usize], reviews: &[ProcessedReview]) -> CourseCluster {
    CourseCluster {
        cluster_id: label,
        reviews: indices.iter().map(|&i| reviews[i].clone()).collect(),
    }
}
