/// Content-addressed embedding cache.
///
/// Narrow get/put interface; constructed once and handed to the gateway.
/// Keys are stable hashes of review identity, not text. Append-only —
/// implementations never evict, and concurrent writes of the same key are
/// idempotent because values are deterministic for a given input.
pub trait IEmbeddingCache: Send + Sync {
    /// Look up a cached embedding.
    fn get(&self, key: &str) -> Option<Vec<f32>>;

    /// Store an embedding. Errors are swallowed by implementations —
    /// a failed cache write degrades to a recomputation, never a run failure.
    fn put(&self, key: &str, embedding: &[f32]);
}
