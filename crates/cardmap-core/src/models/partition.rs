use serde::{Deserialize, Serialize};

use super::result::{ClusteringParameters, ProcessingMetrics};

/// One cluster of a partition, as indices into the input points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionCluster {
    pub members: Vec<usize>,
    /// HDBSCAN stability of the tree node the cluster came from.
    pub stability: Option<f64>,
}

impl PartitionCluster {
    pub fn new(members: Vec<usize>) -> Self {
        Self {
            members,
            stability: None,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Algorithm-agnostic output of a clusterer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub clusters: Vec<PartitionCluster>,
    pub outliers: Vec<usize>,
    /// Per-point outlier scores, indexed like the input. Empty when the algorithm has none.
    pub outlier_scores: Vec<f64>,
    pub parameters: ClusteringParameters,
    pub processing: ProcessingMetrics,
}

impl Partition {
    /// Every point is an outlier.
    pub fn outliers_only(point_count: usize, parameters: ClusteringParameters) -> Self {
        Self {
            clusters: Vec::new(),
            outliers: (0..point_count).collect(),
            outlier_scores: Vec::new(),
            parameters,
            processing: ProcessingMetrics {
                point_count,
                outlier_count: point_count,
                ..Default::default()
            },
        }
    }

    pub fn clustered_count(&self) -> usize {
        self.clusters.iter().map(PartitionCluster::len).sum()
    }

    /// Every index in `0..point_count` appears exactly once across clusters and outliers.
    pub fn covers_exactly(&self, point_count: usize) -> bool {
        let mut seen = vec![false; point_count];
        let all = self
            .clusters
            .iter()
            .flat_map(|c| c.members.iter())
            .chain(self.outliers.iter());
        for &idx in all {
            if idx >= point_count || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        seen.into_iter().all(|s| s)
    }
}
