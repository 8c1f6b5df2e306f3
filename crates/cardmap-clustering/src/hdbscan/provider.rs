//! Adapts HDBSCAN output to the algorithm-agnostic partition shape.

use cardmap_core::config::ClusteringConfig;
use cardmap_core::errors::CardmapResult;
use cardmap_core::models::{ClusteringAlgorithm, DistanceMatrix, Partition, PartitionCluster};
use cardmap_core::traits::{IClusterer, IClusteringObserver};

use super::clusterer::{HdbscanClusterer, HdbscanResult};

impl HdbscanResult {
    /// Drop the tree internals, keeping clusters, outliers, and scores.
    pub fn into_partition(self) -> Partition {
        Partition {
            clusters: self
                .clusters
                .into_iter()
                .map(|c| PartitionCluster {
                    members: c.members,
                    stability: Some(c.stability),
                })
                .collect(),
            outliers: self.outliers,
            outlier_scores: self.outlier_scores,
            parameters: self.parameters,
            processing: self.processing,
        }
    }
}

impl From<HdbscanResult> for Partition {
    fn from(result: HdbscanResult) -> Self {
        result.into_partition()
    }
}

impl IClusterer for HdbscanClusterer {
    fn algorithm(&self) -> ClusteringAlgorithm {
        ClusteringAlgorithm::Hdbscan
    }

    fn cluster(
        &self,
        distances: &DistanceMatrix,
        config: &ClusteringConfig,
        observer: &dyn IClusteringObserver,
    ) -> CardmapResult<Partition> {
        Ok(self.run(distances, config, observer).into_partition())
    }
}
