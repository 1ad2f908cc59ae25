/// Embedding cache errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("failed to open cache at {path}: {reason}")]
    OpenFailed { path: String, reason: String },

    #[error("cache read failed: {reason}")]
    ReadFailed { reason: String },

    #[error("cache write failed: {reason}")]
    WriteFailed { reason: String },
}
