//! Error taxonomy for the pipeline.
//!
//! Each subsystem has its own enum; `TasselError` wraps them all.
//! Soft failures (capability outages, unparsable codes) are recovered
//! locally by their component and never surface here — only genuinely
//! fatal conditions (e.g. a malformed catalog) propagate.

mod cache_error;
mod catalog_error;
mod embedding_error;
mod summary_error;

pub use cache_error::CacheError;
pub use catalog_error::CatalogError;
pub use embedding_error::EmbeddingError;
pub use summary_error::SummaryError;

/// Top-level error for the Tassel pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TasselError {
    #[error(transparent)]
    CatalogError(#[from] CatalogError),

    #[error(transparent)]
    CacheError(#[from] CacheError),

    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    SummaryError(#[from] SummaryError),
}

/// Convenience result alias used across the workspace.
pub type TasselResult<T> = Result<T, TasselError>;
