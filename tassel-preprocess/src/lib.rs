//! # tassel-preprocess
//!
//! First pipeline stage: cleans raw review text, drops sub-threshold
//! noise, and removes near-duplicate re-posts by embedding similarity.
//! When embeddings are unavailable the dedup step is skipped — an
//! explicit degrade, never silent loss of reviews.

pub mod clean;
pub mod dedup;
pub mod preprocessor;

pub use clean::TextCleaner;
pub use preprocessor::{PreprocessOutcome, Preprocessor};
