/// Similarity subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("semantic provider {provider} failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("semantic provider {provider} returned an invalid score {value}")]
    InvalidScore { provider: String, value: f64 },

    #[error("stop-word list parse failed: {reason}")]
    StopWordsParse { reason: String },
}
