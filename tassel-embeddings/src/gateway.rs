//! EmbeddingGateway — cache-first access to the embedding capability.

use tassel_core::errors::{EmbeddingError, TasselResult};
use tassel_core::traits::{IEmbeddingCache, IEmbeddingProvider};
use tracing::{debug, info};

/// Content-addressed gateway over an injected embedding provider.
///
/// Cache keys are blake3 hashes of review ids, not text — identity is
/// stable upstream while text cleaning may change between runs. Only
/// cache misses reach the provider, as one batch call; every new vector
/// is persisted before the call returns.
pub struct EmbeddingGateway {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Box<dyn IEmbeddingCache>,
}

impl EmbeddingGateway {
    pub fn new(provider: Box<dyn IEmbeddingProvider>, cache: Box<dyn IEmbeddingCache>) -> Self {
        Self { provider, cache }
    }

    /// Stable cache key for a review id.
    pub fn cache_key(review_id: &str) -> String {
        blake3::hash(review_id.as_bytes()).to_hex().to_string()
    }

    /// Embed the given reviews, cache-first.
    ///
    /// `ids` and `texts` are parallel slices; the result is parallel to
    /// both. Vectors of unexpected dimensionality are rejected rather
    /// than cached.
    pub fn embed_reviews(&self, ids: &[String], texts: &[String]) -> TasselResult<Vec<Vec<f32>>> {
        if ids.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("ids/texts length mismatch: {} vs {}", ids.len(), texts.len()),
            }
            .into());
        }

        let keys: Vec<String> = ids.iter().map(|id| Self::cache_key(id)).collect();
        let mut vectors: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        let miss_indices: Vec<usize> = vectors
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.is_none().then_some(i))
            .collect();

        debug!(
            total = ids.len(),
            hits = ids.len() - miss_indices.len(),
            misses = miss_indices.len(),
            "embedding cache lookup"
        );

        if !miss_indices.is_empty() {
            let miss_texts: Vec<String> =
                miss_indices.iter().map(|&i| texts[i].clone()).collect();
            let fresh = self.provider.embed_batch(&miss_texts)?;
            if fresh.len() != miss_indices.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} vectors for {} texts",
                        fresh.len(),
                        miss_indices.len()
                    ),
                }
                .into());
            }

            let expected = self.provider.dimensions();
            for (&i, vector) in miss_indices.iter().zip(fresh) {
                if vector.len() != expected {
                    return Err(EmbeddingError::DimensionMismatch {
                        expected,
                        actual: vector.len(),
                    }
                    .into());
                }
                self.cache.put(&keys[i], &vector);
                vectors[i] = Some(vector);
            }
            info!(
                provider = self.provider.name(),
                embedded = miss_indices.len(),
                "persisted fresh embeddings"
            );
        }

        let filled: Vec<Vec<f32>> = vectors.into_iter().flatten().collect();
        if filled.len() != ids.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: "cache fill left gaps".to_string(),
            }
            .into());
        }
        Ok(filled)
    }

    /// The underlying provider's name.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Whether the underlying provider reports itself available.
    pub fn is_available(&self) -> bool {
        self.provider.is_available()
    }

    /// Dimensionality of vectors this gateway produces.
    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }
}
