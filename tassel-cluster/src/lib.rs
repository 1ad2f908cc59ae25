//! # tassel-cluster
//!
//! Groups a course's reviews into topic clusters: density-based,
//! noise-aware (HDBSCAN), with a single-cluster fallback for partitions
//! too small to cluster meaningfully. Each cluster is then typed by
//! keyword classification.

pub mod classify;
pub mod course_cluster;

pub use classify::classify_cluster;
pub use course_cluster::{cluster_by_course, single_cluster_per_course, ClusterOutcome, CourseCluster};
