//! Average-linkage agglomerative clustering.

use std::time::Instant;

use cardmap_core::config::ClusteringConfig;
use cardmap_core::errors::CardmapResult;
use cardmap_core::models::{
    ClusteringAlgorithm, ClusteringParameters, DistanceMatrix, Partition, PartitionCluster,
    ProcessingMetrics,
};
use cardmap_core::traits::{ClusteringEvent, IClusterer, IClusteringObserver};

use crate::size_policy::apply_size_bounds;

/// Merge groups while the closest pair's average similarity is at least `threshold`.
/// Returns groups of two or more points and the points left on their own.
pub fn average_linkage(distances: &DistanceMatrix, threshold: f64) -> (Vec<Vec<usize>>, Vec<usize>) {
    let n = distances.len();
    let max_distance = 1.0 - threshold;
    let mut groups: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut active = vec![true; n];
    let mut linkage: Vec<Vec<f64>> = (0..n).map(|i| distances.row(i).to_vec()).collect();

    loop {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..n {
            if !active[i] {
                continue;
            }
            for j in (i + 1)..n {
                if !active[j] {
                    continue;
                }
                let d = linkage[i][j];
                if best.map_or(true, |(_, _, bd)| d < bd) {
                    best = Some((i, j, d));
                }
            }
        }
        let Some((i, j, d)) = best else { break };
        if d > max_distance {
            break;
        }

        // Lance-Williams update for average linkage
        let (size_i, size_j) = (groups[i].len() as f64, groups[j].len() as f64);
        for k in 0..n {
            if k == i || k == j || !active[k] {
                continue;
            }
            let merged = (size_i * linkage[i][k] + size_j * linkage[j][k]) / (size_i + size_j);
            linkage[i][k] = merged;
            linkage[k][i] = merged;
        }
        let absorbed = std::mem::take(&mut groups[j]);
        groups[i].extend(absorbed);
        active[j] = false;
    }

    let mut clusters = Vec::new();
    let mut singletons = Vec::new();
    for (idx, mut group) in groups.into_iter().enumerate() {
        if !active[idx] {
            continue;
        }
        if group.len() == 1 {
            singletons.push(group[0]);
        } else {
            group.sort_unstable();
            clusters.push(group);
        }
    }
    (clusters, singletons)
}

/// Agglomerative clustering cut at the configured similarity threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchicalClusterer;

impl HierarchicalClusterer {
    pub fn new() -> Self {
        Self
    }
}

impl IClusterer for HierarchicalClusterer {
    fn algorithm(&self) -> ClusteringAlgorithm {
        ClusteringAlgorithm::Hierarchical
    }

    fn cluster(
        &self,
        distances: &DistanceMatrix,
        config: &ClusteringConfig,
        observer: &dyn IClusteringObserver,
    ) -> CardmapResult<Partition> {
        let start = Instant::now();
        let n = distances.len();
        let parameters = ClusteringParameters {
            eps: None,
            min_pts: 1,
            min_cluster_size: config.min_cluster_size,
            max_cluster_size: config.max_cluster_size,
            similarity_threshold: config.similarity_threshold,
            glosh_threshold: None,
        };

        let (groups, singletons) = average_linkage(distances, config.similarity_threshold);
        tracing::debug!(groups = groups.len(), singletons = singletons.len(), "agglomeration complete");

        let bounded = apply_size_bounds(
            groups.into_iter().map(PartitionCluster::new).collect(),
            singletons,
            distances,
            config.min_cluster_size,
            config.max_cluster_size,
        );
        observer.observe(&ClusteringEvent::SizeBoundsApplied {
            truncated_members: bounded.truncated_members,
            demoted_clusters: bounded.demoted_clusters,
        });

        let processing = ProcessingMetrics {
            point_count: n,
            selected_cluster_count: bounded.clusters.len(),
            truncated_members: bounded.truncated_members,
            demoted_clusters: bounded.demoted_clusters,
            outlier_count: bounded.outliers.len(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
            ..Default::default()
        };
        Ok(Partition {
            clusters: bounded.clusters,
            outliers: bounded.outliers,
            outlier_scores: Vec::new(),
            parameters,
            processing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_close_points_and_stops_at_threshold() {
        let d = DistanceMatrix::from_rows(vec![
            vec![0.0, 0.1, 0.2, 0.9],
            vec![0.1, 0.0, 0.3, 0.9],
            vec![0.2, 0.3, 0.0, 0.8],
            vec![0.9, 0.9, 0.8, 0.0],
        ])
        .unwrap();
        let (clusters, singletons) = average_linkage(&d, 0.5);
        assert_eq!(clusters, vec![vec![0, 1, 2]]);
        assert_eq!(singletons, vec![3]);
    }

    #[test]
    fn average_linkage_blocks_chaining() {
        // single linkage would chain 0-1-2 through 0.4 steps; the group average is too far
        let d = DistanceMatrix::from_rows(vec![
            vec![0.0, 0.4, 0.8],
            vec![0.4, 0.0, 0.4],
            vec![0.8, 0.4, 0.0],
        ])
        .unwrap();
        let (clusters, singletons) = average_linkage(&d, 0.5);
        assert_eq!(clusters, vec![vec![0, 1]]);
        assert_eq!(singletons, vec![2]);
    }
}
