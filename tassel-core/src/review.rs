//! Review records as they move through the pipeline.

use serde::{Deserialize, Serialize};

/// A raw review as harvested by the upstream scrapers.
///
/// Owned by the upstream store; the pipeline never mutates it.
/// Both `course_code` and `text` arrive as free text and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReview {
    pub review_id: String,
    pub professor_id: String,
    pub course_code: Option<String>,
    pub text: Option<String>,
}

/// A review after cleaning and (later) course-code canonicalization.
///
/// The preprocessor creates one of these per surviving raw review with
/// `course_code` carrying the raw string; the normalize stage rewrites
/// `course_code` to a canonical code, cloning the record once per extra
/// code when the raw code resolves to several courses. Pipeline-internal
/// working unit — never persisted independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedReview {
    pub review_id: String,
    pub professor_id: String,
    pub course_code: String,
    pub text: String,
    pub original_text: String,
    pub word_count: usize,
}

impl ProcessedReview {
    /// Copy of this review re-keyed under another course code.
    /// Used when a compound raw code expands into several courses.
    pub fn with_course_code(&self, code: &str) -> Self {
        Self {
            course_code: code.to_string(),
            ..self.clone()
        }
    }
}
