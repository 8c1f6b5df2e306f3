use crate::config::ClusteringConfig;
use crate::errors::CardmapResult;
use crate::models::{ClusteringAlgorithm, DistanceMatrix, Partition};

use super::IClusteringObserver;

/// A clustering algorithm over a precomputed distance matrix.
pub trait IClusterer: Send + Sync {
    /// Which variant this is.
    fn algorithm(&self) -> ClusteringAlgorithm;

    /// Partition the points of `distances` into clusters and outliers.
    ///
    /// Degenerate input (empty, too few points) yields an empty or outlier-only
    /// partition, never an error.
    fn cluster(
        &self,
        distances: &DistanceMatrix,
        config: &ClusteringConfig,
        observer: &dyn IClusteringObserver,
    ) -> CardmapResult<Partition>;
}
