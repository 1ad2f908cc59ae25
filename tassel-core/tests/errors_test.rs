//! Error display and conversion tests.

use tassel_core::errors::{
    CacheError, CatalogError, EmbeddingError, SummaryError, TasselError,
};

#[test]
fn catalog_error_display() {
    let err = CatalogError::MalformedEntry {
        row: 12,
        reason: "empty cross-list group".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "malformed catalog entry at row 12: empty cross-list group"
    );
}

#[test]
fn embedding_error_display() {
    let err = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 128,
    };
    assert_eq!(err.to_string(), "dimension mismatch: expected 384, got 128");
}

#[test]
fn subsystem_errors_convert_to_top_level() {
    let err: TasselError = SummaryError::GenerationFailed {
        reason: "timeout".to_string(),
    }
    .into();
    assert!(matches!(err, TasselError::SummaryError(_)));
    assert_eq!(err.to_string(), "generation failed: timeout");

    let err: TasselError = CacheError::WriteFailed {
        reason: "disk full".to_string(),
    }
    .into();
    assert!(matches!(err, TasselError::CacheError(_)));
}
