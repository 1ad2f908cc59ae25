//! The preprocessing stage: clean, filter, dedup.

use tassel_core::config::PreprocessConfig;
use tassel_core::models::DegradationEvent;
use tassel_core::review::{ProcessedReview, RawReview};
use tassel_embeddings::EmbeddingGateway;
use tracing::{debug, info, warn};

use crate::clean::TextCleaner;
use crate::dedup::near_duplicate_mask;

/// Result of a preprocessing pass.
pub struct PreprocessOutcome {
    /// Surviving reviews, in input order. `course_code` still carries the
    /// raw string; the normalize stage canonicalizes it.
    pub reviews: Vec<ProcessedReview>,
    /// Soft fallbacks taken (currently only: dedup skipped).
    pub events: Vec<DegradationEvent>,
}

/// Cleans raw reviews and removes noise and near-duplicates.
pub struct Preprocessor {
    config: PreprocessConfig,
    cleaner: TextCleaner,
}

impl Preprocessor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self {
            config,
            cleaner: TextCleaner::new(),
        }
    }

    /// Process one professor's raw reviews.
    ///
    /// Reviews with null or sub-threshold text are dropped. When
    /// `deduplicate` is on and a gateway is supplied, near-duplicates are
    /// excluded by embedding similarity; an unavailable gateway or a
    /// failed embed call skips dedup and records a degradation event.
    pub fn process(
        &self,
        raws: &[RawReview],
        gateway: Option<&EmbeddingGateway>,
    ) -> PreprocessOutcome {
        let mut reviews = Vec::with_capacity(raws.len());
        for raw in raws {
            let original = raw.text.as_deref().unwrap_or("");
            let (cleaned, word_count) = self.cleaner.clean(original);
            if word_count < self.config.min_word_count {
                debug!(review_id = %raw.review_id, word_count, "dropped below noise floor");
                continue;
            }
            reviews.push(ProcessedReview {
                review_id: raw.review_id.clone(),
                professor_id: raw.professor_id.clone(),
                course_code: raw.course_code.clone().unwrap_or_default(),
                text: cleaned,
                original_text: original.to_string(),
                word_count,
            });
        }

        let mut events = Vec::new();
        if self.config.deduplicate && reviews.len() > 1 {
            match self.dedup(&mut reviews, gateway) {
                Ok(removed) => {
                    info!(
                        kept = reviews.len(),
                        removed, "near-duplicate removal complete"
                    );
                }
                Err(failure) => {
                    warn!(failure = %failure, "skipping dedup, keeping all reviews");
                    events.push(DegradationEvent::now(
                        "preprocess",
                        failure,
                        "dedup skipped",
                    ));
                }
            }
        }

        PreprocessOutcome { reviews, events }
    }

    /// Remove near-duplicates in place. Returns the number removed, or
    /// the failure description if embeddings were unavailable.
    fn dedup(
        &self,
        reviews: &mut Vec<ProcessedReview>,
        gateway: Option<&EmbeddingGateway>,
    ) -> Result<usize, String> {
        let gateway = gateway.ok_or_else(|| "no embedding gateway".to_string())?;

        let ids: Vec<String> = reviews.iter().map(|r| r.review_id.clone()).collect();
        let texts: Vec<String> = reviews.iter().map(|r| r.text.clone()).collect();
        let vectors = gateway
            .embed_reviews(&ids, &texts)
            .map_err(|e| format!("embedding failed: {e}"))?;

        let mask = near_duplicate_mask(&vectors, self.config.dedup_threshold);
        let before = reviews.len();
        let mut idx = 0;
        reviews.retain(|_| {
            let keep = !mask[idx];
            idx += 1;
            keep
        });
        Ok(before - reviews.len())
    }
}
