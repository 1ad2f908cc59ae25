//! # tassel-core
//!
//! Foundation crate for the Tassel review-summarization pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod review;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::{TasselError, TasselResult};
pub use models::{
    ClusterSummary, ClusterType, Confidence, CourseSummary, DegradationEvent, ProfessorSummary,
    Sentiment,
};
pub use review::{ProcessedReview, RawReview};
