//! Cluster quality metrics.
//!
//! `avg_cohesion` is the unweighted mean of per-cluster mean pairwise similarity and
//! `coverage_ratio` is clustered / (clustered + outliers). The remaining metrics are
//! fixed proxies of cohesion:
//! - silhouette ≈ avg_cohesion
//! - modularity ≈ 0.8 · avg_cohesion
//! - inter-cluster distance ≈ 1.2 · avg_cohesion
//! - intra-cluster distance = 1 − avg_cohesion

use cardmap_core::models::{ClusterQualityMetrics, Partition, SimilarityMatrix, SmartCluster};

const MODULARITY_FACTOR: f64 = 0.8;
const INTER_DISTANCE_FACTOR: f64 = 1.2;

/// Stateless; evaluating the same partition twice yields identical metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterQualityEvaluator;

impl ClusterQualityEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Mean pairwise similarity among `members`.
    pub fn cohesion(&self, members: &[usize], similarity: &SimilarityMatrix) -> f64 {
        similarity.mean_within(members)
    }

    pub fn evaluate(&self, partition: &Partition, similarity: &SimilarityMatrix) -> ClusterQualityMetrics {
        let cohesions: Vec<f64> = partition
            .clusters
            .iter()
            .map(|c| self.cohesion(&c.members, similarity))
            .collect();
        let sizes: Vec<usize> = partition.clusters.iter().map(|c| c.len()).collect();
        Self::from_parts(&cohesions, &sizes, partition.outliers.len())
    }

    /// Metrics from already-labelled clusters, using their stored cohesion.
    pub fn evaluate_clusters(&self, clusters: &[SmartCluster], outlier_count: usize) -> ClusterQualityMetrics {
        let cohesions: Vec<f64> = clusters.iter().map(|c| c.cohesion).collect();
        let sizes: Vec<usize> = clusters.iter().map(SmartCluster::size).collect();
        Self::from_parts(&cohesions, &sizes, outlier_count)
    }

    fn from_parts(cohesions: &[f64], sizes: &[usize], outlier_count: usize) -> ClusterQualityMetrics {
        let avg_cohesion = avg(cohesions);
        let clustered: usize = sizes.iter().sum();
        let total = clustered + outlier_count;
        let coverage_ratio = if total == 0 {
            0.0
        } else {
            clustered as f64 / total as f64
        };
        let avg_cluster_size = if sizes.is_empty() {
            0.0
        } else {
            clustered as f64 / sizes.len() as f64
        };

        ClusterQualityMetrics {
            avg_cohesion,
            coverage_ratio,
            silhouette_score: avg_cohesion,
            modularity: MODULARITY_FACTOR * avg_cohesion,
            inter_cluster_distance: INTER_DISTANCE_FACTOR * avg_cohesion,
            intra_cluster_distance: 1.0 - avg_cohesion,
            cluster_count: sizes.len(),
            outlier_count,
            avg_cluster_size,
        }
    }
}

fn avg(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use cardmap_core::models::{
        Centroid, ClusterLabel, ClusteringParameters, LabelStrategy, PartitionCluster, ProcessingMetrics,
    };

    use super::*;

    fn partition(clusters: Vec<Vec<usize>>, outliers: Vec<usize>) -> Partition {
        Partition {
            clusters: clusters.into_iter().map(PartitionCluster::new).collect(),
            outliers,
            outlier_scores: Vec::new(),
            parameters: ClusteringParameters::default(),
            processing: ProcessingMetrics::default(),
        }
    }

    #[test]
    fn proxies_follow_cohesion() {
        let mut s = SimilarityMatrix::zeros(5);
        s.set(0, 1, 0.8);
        s.set(2, 3, 0.6);
        let metrics = ClusterQualityEvaluator::new().evaluate(&partition(vec![vec![0, 1], vec![2, 3]], vec![4]), &s);
        assert!((metrics.avg_cohesion - 0.7).abs() < 1e-12);
        assert!((metrics.coverage_ratio - 0.8).abs() < 1e-12);
        assert_eq!(metrics.silhouette_score, metrics.avg_cohesion);
        assert!((metrics.modularity - 0.56).abs() < 1e-12);
        assert!((metrics.inter_cluster_distance - 0.84).abs() < 1e-12);
        assert!((metrics.intra_cluster_distance - 0.3).abs() < 1e-12);
        assert_eq!(metrics.cluster_count, 2);
        assert_eq!(metrics.outlier_count, 1);
        assert_eq!(metrics.avg_cluster_size, 2.0);
    }

    #[test]
    fn empty_partition_is_all_zero() {
        let s = SimilarityMatrix::zeros(0);
        let metrics = ClusterQualityEvaluator::new().evaluate(&partition(vec![], vec![]), &s);
        assert_eq!(metrics.coverage_ratio, 0.0);
        assert_eq!(metrics.avg_cohesion, 0.0);
        assert_eq!(metrics.intra_cluster_distance, 1.0);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut s = SimilarityMatrix::zeros(4);
        s.set(0, 1, 0.33);
        s.set(0, 2, 0.71);
        s.set(1, 2, 0.12);
        let p = partition(vec![vec![0, 1, 2]], vec![3]);
        let eval = ClusterQualityEvaluator::new();
        assert_eq!(eval.evaluate(&p, &s), eval.evaluate(&p, &s));
    }

    #[test]
    fn stored_cohesion_gives_the_same_metrics_as_the_partition() {
        let mut s = SimilarityMatrix::zeros(6);
        s.set(0, 1, 0.9);
        s.set(0, 2, 0.4);
        s.set(1, 2, 0.65);
        s.set(3, 4, 0.2);
        let p = partition(vec![vec![0, 1, 2], vec![3, 4]], vec![5]);
        let eval = ClusterQualityEvaluator::new();

        let smart: Vec<SmartCluster> = p
            .clusters
            .iter()
            .enumerate()
            .map(|(i, c)| SmartCluster {
                id: format!("cluster-{i}"),
                node_ids: c.members.iter().map(|m| m.to_string()).collect(),
                centroid: Centroid::default(),
                cohesion: eval.cohesion(&c.members, &s),
                stability: None,
                dominant_tags: Vec::new(),
                dominant_types: Vec::new(),
                label: ClusterLabel {
                    text: "Group".to_string(),
                    alternatives: Vec::new(),
                    label_confidence: 0.5,
                    reasoning: String::new(),
                    strategy: LabelStrategy::ErrorFallback,
                },
            })
            .collect();

        assert_eq!(eval.evaluate_clusters(&smart, p.outliers.len()), eval.evaluate(&p, &s));
    }
}
