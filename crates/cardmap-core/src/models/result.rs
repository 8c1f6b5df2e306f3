use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::algorithm::ClusteringAlgorithm;
use super::cluster::SmartCluster;
use super::quality::ClusterQualityMetrics;

/// Effective parameters a clusterer ran with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusteringParameters {
    /// Neighbourhood radius (DBSCAN only).
    pub eps: Option<f64>,
    pub min_pts: usize,
    pub min_cluster_size: usize,
    pub max_cluster_size: usize,
    pub similarity_threshold: f64,
    /// GLOSH reclassification threshold (HDBSCAN only).
    pub glosh_threshold: Option<f64>,
}

/// Counters describing one clustering run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessingMetrics {
    pub point_count: usize,
    pub mst_edge_count: usize,
    pub tree_node_count: usize,
    pub selected_cluster_count: usize,
    pub glosh_reclassified: usize,
    pub truncated_members: usize,
    pub demoted_clusters: usize,
    pub outlier_count: usize,
    pub elapsed_ms: f64,
}

/// The single result of a clustering call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusteringResult {
    pub clusters: Vec<SmartCluster>,
    /// Ids of nodes assigned to no cluster.
    pub outliers: Vec<String>,
    pub quality: ClusterQualityMetrics,
    pub algorithm: ClusteringAlgorithm,
    pub parameters: ClusteringParameters,
    /// Node id → GLOSH score. Empty for algorithms without outlier scoring.
    pub outlier_scores: BTreeMap<String, f64>,
    pub processing: ProcessingMetrics,
}

impl ClusteringResult {
    /// A result with nothing clustered.
    pub fn empty(algorithm: ClusteringAlgorithm, parameters: ClusteringParameters) -> Self {
        Self {
            clusters: Vec::new(),
            outliers: Vec::new(),
            quality: ClusterQualityMetrics::default(),
            algorithm,
            parameters,
            outlier_scores: BTreeMap::new(),
            processing: ProcessingMetrics::default(),
        }
    }

    /// Total number of nodes accounted for.
    pub fn node_count(&self) -> usize {
        self.clusters.iter().map(SmartCluster::size).sum::<usize>() + self.outliers.len()
    }
}
