//! Classic DBSCAN over a precomputed distance matrix.

use std::collections::VecDeque;
use std::time::Instant;

use cardmap_core::config::ClusteringConfig;
use cardmap_core::errors::CardmapResult;
use cardmap_core::models::{
    ClusteringAlgorithm, ClusteringParameters, DistanceMatrix, Partition, PartitionCluster,
    ProcessingMetrics,
};
use cardmap_core::traits::{ClusteringEvent, IClusterer, IClusteringObserver};

use crate::params::AdaptiveParameters;
use crate::size_policy::apply_size_bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointLabel {
    Unclassified,
    Noise,
    Cluster(usize),
}

/// Points within `eps` of `point`, including the point itself.
fn region_query(distances: &DistanceMatrix, point: usize, eps: f64) -> Vec<usize> {
    distances
        .row(point)
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d <= eps)
        .map(|(i, _)| i)
        .collect()
}

/// Raw DBSCAN: clusters of point indices plus noise, before size bounds.
pub fn dbscan(distances: &DistanceMatrix, eps: f64, min_pts: usize) -> (Vec<Vec<usize>>, Vec<usize>) {
    let n = distances.len();
    let mut labels = vec![PointLabel::Unclassified; n];
    let mut clusters: Vec<Vec<usize>> = Vec::new();

    for point in 0..n {
        if labels[point] != PointLabel::Unclassified {
            continue;
        }
        let neighbors = region_query(distances, point, eps);
        if neighbors.len() < min_pts {
            labels[point] = PointLabel::Noise;
            continue;
        }

        let cluster_id = clusters.len();
        let mut members = vec![point];
        labels[point] = PointLabel::Cluster(cluster_id);

        let mut frontier: VecDeque<usize> = neighbors.into_iter().filter(|&q| q != point).collect();
        while let Some(q) = frontier.pop_front() {
            match labels[q] {
                PointLabel::Cluster(_) => continue,
                PointLabel::Noise => {
                    // border point
                    labels[q] = PointLabel::Cluster(cluster_id);
                    members.push(q);
                    continue;
                }
                PointLabel::Unclassified => {
                    labels[q] = PointLabel::Cluster(cluster_id);
                    members.push(q);
                }
            }
            let q_neighbors = region_query(distances, q, eps);
            if q_neighbors.len() >= min_pts {
                frontier.extend(
                    q_neighbors
                        .into_iter()
                        .filter(|&r| !matches!(labels[r], PointLabel::Cluster(_))),
                );
            }
        }
        members.sort_unstable();
        clusters.push(members);
    }

    let noise = labels
        .iter()
        .enumerate()
        .filter(|(_, l)| **l == PointLabel::Noise)
        .map(|(i, _)| i)
        .collect();
    (clusters, noise)
}

/// DBSCAN with adaptively derived `eps`/`minPts` and the shared size policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbscanClusterer;

impl DbscanClusterer {
    pub fn new() -> Self {
        Self
    }
}

impl IClusterer for DbscanClusterer {
    fn algorithm(&self) -> ClusteringAlgorithm {
        ClusteringAlgorithm::Dbscan
    }

    fn cluster(
        &self,
        distances: &DistanceMatrix,
        config: &ClusteringConfig,
        observer: &dyn IClusteringObserver,
    ) -> CardmapResult<Partition> {
        let start = Instant::now();
        let n = distances.len();
        let params = AdaptiveParameters::derive(n, config);
        let parameters = ClusteringParameters {
            eps: Some(params.eps),
            min_pts: params.min_pts,
            min_cluster_size: config.min_cluster_size,
            max_cluster_size: config.max_cluster_size,
            similarity_threshold: config.similarity_threshold,
            glosh_threshold: None,
        };
        observer.observe(&ClusteringEvent::ParametersDerived {
            eps: Some(params.eps),
            min_pts: params.min_pts,
        });
        if n == 0 {
            return Ok(Partition::outliers_only(0, parameters));
        }

        let (raw, noise) = dbscan(distances, params.eps, params.min_pts);
        tracing::debug!(
            clusters = raw.len(),
            noise = noise.len(),
            eps = params.eps,
            min_pts = params.min_pts,
            "dbscan pass complete"
        );

        let bounded = apply_size_bounds(
            raw.into_iter().map(PartitionCluster::new).collect(),
            noise,
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

    fn two_groups() -> DistanceMatrix {
        // 0,1,2 tight; 3,4,5 tight; groups far apart
        let rows = (0..6)
            .map(|i| {
                (0..6)
                    .map(|j| {
                        if i == j {
                            0.0
                        } else if (i < 3) == (j < 3) {
                            0.1
                        } else {
                            0.9
                        }
                    })
                    .collect()
            })
            .collect();
        DistanceMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn finds_two_dense_groups() {
        let (clusters, noise) = dbscan(&two_groups(), 0.3, 2);
        assert_eq!(clusters, vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert!(noise.is_empty());
    }

    #[test]
    fn isolated_point_is_noise() {
        let rows = vec![
            vec![0.0, 0.1, 0.9],
            vec![0.1, 0.0, 0.9],
            vec![0.9, 0.9, 0.0],
        ];
        let d = DistanceMatrix::from_rows(rows).unwrap();
        let (clusters, noise) = dbscan(&d, 0.3, 2);
        assert_eq!(clusters, vec![vec![0, 1]]);
        assert_eq!(noise, vec![2]);
    }

    #[test]
    fn border_points_join_the_cluster() {
        // chain 0 - 1 - 2 where only 1 is core with min_pts = 3
        let rows = vec![
            vec![0.0, 0.2, 0.4],
            vec![0.2, 0.0, 0.2],
            vec![0.4, 0.2, 0.0],
        ];
        let d = DistanceMatrix::from_rows(rows).unwrap();
        let (clusters, noise) = dbscan(&d, 0.25, 3);
        assert_eq!(clusters, vec![vec![0, 1, 2]]);
        assert!(noise.is_empty());
    }
}
