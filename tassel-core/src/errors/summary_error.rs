/// Generative summarization capability errors.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },
}
