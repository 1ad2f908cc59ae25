//! # tassel-embeddings
//!
//! Wraps the external embedding capability behind a content-addressed,
//! append-only cache keyed by a stable hash of each review id. A cache
//! hit skips the external call entirely; misses are batched, and every
//! new vector is persisted before the call returns.

pub mod cache;
pub mod gateway;
pub mod similarity;
pub mod tfidf;

pub use cache::{CacheCoordinator, L1MemoryCache, L2SqliteCache};
pub use gateway::EmbeddingGateway;
pub use tfidf::TfIdfFallbackProvider;
