use crate::errors::TasselResult;

/// Generative summarization provider.
///
/// Approximately deterministic (greedy/beam decoding, no sampling).
pub trait ISummaryProvider: Send + Sync {
    /// Compress `text` into a summary of bounded output length.
    fn summarize(
        &self,
        text: &str,
        max_out_tokens: usize,
        min_out_tokens: usize,
    ) -> TasselResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
