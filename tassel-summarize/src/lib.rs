//! # tassel-summarize
//!
//! Compresses a topic cluster's reviews into a short summary. Small
//! clusters and every failure path produce an extractive summary —
//! degraded, never absent. The generative path chunks long input on
//! sentence boundaries and allows exactly one hierarchical re-pass.

pub mod extractive;
pub mod sentence;
pub mod sentiment;
pub mod summarizer;

pub use summarizer::{ClusterSummarizer, SummaryOutcome};
