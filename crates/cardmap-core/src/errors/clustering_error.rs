/// Clustering subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("clustering algorithm '{algorithm}' is not implemented")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("matrix shape mismatch: expected {expected} points, got {actual}")]
    MatrixShape { expected: usize, actual: usize },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}
