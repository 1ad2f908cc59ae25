//! Hashed TF-IDF fallback embedding provider.
//!
//! Deterministic dense vectors with no external dependencies, for tests
//! and air-gapped runs. Not semantically rich; callers choose to inject
//! it — the gateway never substitutes it silently.

use std::collections::HashMap;

use tassel_core::errors::TasselResult;
use tassel_core::traits::IEmbeddingProvider;

/// Fallback embedding provider over hashed term frequencies.
pub struct TfIdfFallbackProvider {
    dimensions: usize,
}

impl TfIdfFallbackProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index (FNV-1a).
    fn bucket(term: &str, dims: usize) -> usize {
        let h = term.bytes().fold(0xcbf29ce484222325u64, |h, b| {
            (h ^ b as u64).wrapping_mul(0x100000001b3)
        });
        (h as usize) % dims
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|t| t.len() >= 2)
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for token in &tokens {
            *tf.entry(token.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &tf {
            // IDF stand-in: longer terms carry more signal than stopword-
            // length ones.
            let weight = (count / total) * (1.0 + (term.len() as f32).ln());
            vec[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallbackProvider {
    fn embed(&self, text: &str) -> TasselResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> TasselResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::cosine_similarity;

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = TfIdfFallbackProvider::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_normalized() {
        let p = TfIdfFallbackProvider::new(256);
        let v = p.embed("the professor explains recursion clearly").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic() {
        let p = TfIdfFallbackProvider::new(256);
        assert_eq!(
            p.embed("same text both times").unwrap(),
            p.embed("same text both times").unwrap()
        );
    }

    #[test]
    fn similar_texts_score_higher_than_unrelated() {
        let p = TfIdfFallbackProvider::new(256);
        let a = p.embed("exams were brutally hard but fair").unwrap();
        let b = p.embed("exams were hard though fair overall").unwrap();
        let c = p.embed("attendance policy strict about laptops").unwrap();
        assert!(cosine_similarity(&a, &b) > cosine_similarity(&a, &c));
    }

    #[test]
    fn batch_matches_individual() {
        let p = TfIdfFallbackProvider::new(64);
        let texts = vec!["grading is lenient".to_string(), "heavy workload".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }
}
