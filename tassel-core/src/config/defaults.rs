//! Default values shared between config structs and their docs.

/// Minimum cleaned word count for a review to survive the noise floor.
pub const DEFAULT_MIN_WORD_COUNT: usize = 5;

/// Cosine similarity at or above which two reviews are near-duplicates.
pub const DEFAULT_DEDUP_THRESHOLD: f64 = 0.95;

/// Whether near-duplicate removal runs at all.
pub const DEFAULT_DEDUPLICATE: bool = true;

/// Dimensionality expected from the embedding provider.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Max entries in the L1 in-memory embedding cache.
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

/// Course partitions smaller than this get one cluster, no HDBSCAN.
/// Density estimates below 3× the minimum cluster size are meaningless.
pub const DEFAULT_MIN_REVIEWS_FOR_CLUSTERING: usize = 6;

/// Minimum cluster size for HDBSCAN.
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;

/// Safe input bound (characters) for one generative summarization call.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 4000;

/// Output token bounds passed to the generative provider.
pub const DEFAULT_MAX_SUMMARY_TOKENS: usize = 120;
pub const DEFAULT_MIN_SUMMARY_TOKENS: usize = 30;
