use super::{ClusteringError, EmbeddingError, LabelingError, SimilarityError};

/// Top-level error for every fallible cardmap operation.
#[derive(Debug, thiserror::Error)]
pub enum CardmapError {
    #[error("similarity error: {0}")]
    SimilarityError(#[from] SimilarityError),

    #[error("clustering error: {0}")]
    ClusteringError(#[from] ClusteringError),

    #[error("labeling error: {0}")]
    LabelingError(#[from] LabelingError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type CardmapResult<T> = Result<T, CardmapError>;
