//! Derived models produced by the pipeline stages.

mod cluster_summary;
mod cluster_type;
mod confidence;
mod course_summary;
mod degradation_event;
mod professor_summary;

pub use cluster_summary::ClusterSummary;
pub use cluster_type::{ClusterType, Sentiment};
pub use confidence::Confidence;
pub use course_summary::CourseSummary;
pub use degradation_event::DegradationEvent;
pub use professor_summary::ProfessorSummary;
