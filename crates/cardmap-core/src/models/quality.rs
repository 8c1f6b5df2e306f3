use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate quality metrics for a clustering result.
///
/// `silhouette_score`, `modularity` and the two distances are proxies derived
/// from `avg_cohesion`, not the textbook formulas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterQualityMetrics {
    pub avg_cohesion: f64,
    pub coverage_ratio: f64,
    pub silhouette_score: f64,
    pub modularity: f64,
    pub inter_cluster_distance: f64,
    pub intra_cluster_distance: f64,
    pub cluster_count: usize,
    pub outlier_count: usize,
    pub avg_cluster_size: f64,
}
