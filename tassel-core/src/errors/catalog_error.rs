/// Normalization knowledge-base errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed catalog entry at row {row}: {reason}")]
    MalformedEntry { row: usize, reason: String },

    #[error("catalog group has no canonical representative: {group}")]
    NoRepresentative { group: String },
}
