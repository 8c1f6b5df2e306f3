/// Errors raised by an external embedding provider.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
