//! Orchestrates the HDBSCAN stages and the size policy.

use std::time::Instant;

use cardmap_core::config::ClusteringConfig;
use cardmap_core::models::{
    ClusteringParameters, DistanceMatrix, PartitionCluster, ProcessingMetrics,
};
use cardmap_core::traits::{ClusteringEvent, IClusteringObserver};
use tracing::{debug, info};

use super::extraction::excess_of_mass;
use super::glosh::{glosh_scores, reclassify};
use super::hierarchy::{ClusterTree, Dendrogram, StabilityScores};
use super::mst::{minimum_spanning_tree, MstEdge};
use super::mutual_reachability::{core_distances, mutual_reachability};
use crate::params::AdaptiveParameters;
use crate::size_policy::apply_size_bounds;

/// A flat cluster taken from the condensed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HdbscanCluster {
    /// Condensed-tree node the cluster was selected from.
    pub tree_node: usize,
    /// Point indices, ascending, after outlier reclassification and size bounds.
    pub members: Vec<usize>,
    pub stability: f64,
    pub lambda_birth: f64,
    /// Highest density level any of the node's points reaches.
    pub lambda_max: f64,
}

/// Everything an HDBSCAN run produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HdbscanResult {
    pub clusters: Vec<HdbscanCluster>,
    /// Ascending.
    pub outliers: Vec<usize>,
    /// GLOSH score per point. Empty when the input was too small to build a tree.
    pub outlier_scores: Vec<f64>,
    pub tree: ClusterTree,
    pub stability: StabilityScores,
    /// Tree nodes chosen by excess-of-mass, before reclassification and size bounds.
    pub selected: Vec<usize>,
    pub mst: Vec<MstEdge>,
    pub parameters: ClusteringParameters,
    pub processing: ProcessingMetrics,
}

/// HDBSCAN over a precomputed distance matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct HdbscanClusterer;

impl HdbscanClusterer {
    pub fn new() -> Self {
        Self
    }

    /// Run all stages. Inputs with fewer than `2·minPts` points come back as all outliers.
    pub fn run(
        &self,
        distances: &DistanceMatrix,
        config: &ClusteringConfig,
        observer: &dyn IClusteringObserver,
    ) -> HdbscanResult {
        let start = Instant::now();
        let n = distances.len();
        let min_pts = AdaptiveParameters::derive(n, config).min_pts;
        let options = &config.hdbscan;
        let parameters = ClusteringParameters {
            eps: None,
            min_pts,
            min_cluster_size: config.min_cluster_size,
            max_cluster_size: config.max_cluster_size,
            similarity_threshold: config.similarity_threshold,
            glosh_threshold: Some(options.glosh_threshold),
        };
        observer.observe(&ClusteringEvent::ParametersDerived { eps: None, min_pts });

        if n < 2 * min_pts {
            debug!(points = n, min_pts, "too few points for a density hierarchy");
            return HdbscanResult {
                outliers: (0..n).collect(),
                parameters,
                processing: ProcessingMetrics {
                    point_count: n,
                    outlier_count: n,
                    elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
                    ..Default::default()
                },
                ..Default::default()
            };
        }

        let core = core_distances(distances, min_pts);
        let reachability = mutual_reachability(distances, &core);
        let mst = minimum_spanning_tree(&reachability);
        let dendrogram = Dendrogram::from_mst(n, &mst);
        let tree = ClusterTree::condense(&dendrogram, config.min_cluster_size);
        let selected = excess_of_mass(&tree, options.allow_single_cluster);
        debug_assert!(tree.is_antichain(&selected));
        observer.observe(&ClusteringEvent::HierarchyBuilt {
            mst_edges: mst.len(),
            tree_nodes: tree.len(),
            selected_clusters: selected.len(),
        });

        let scores = glosh_scores(&tree, &selected);
        let mut outliers: Vec<usize> = Vec::new();
        let mut owner = vec![None; n];
        let mut candidates = Vec::with_capacity(selected.len());
        let mut reclassified = 0;
        for &id in &selected {
            let Some(node) = tree.node(id) else { continue };
            for &p in &node.points {
                owner[p] = Some(id);
            }
            let (kept, removed) = reclassify(&node.points, &scores, options.glosh_threshold);
            reclassified += removed.len();
            outliers.extend(removed);
            candidates.push(PartitionCluster {
                members: kept,
                stability: Some(node.stability),
            });
        }
        outliers.extend((0..n).filter(|&p| owner[p].is_none()));
        if reclassified > 0 {
            observer.observe(&ClusteringEvent::OutliersReclassified {
                count: reclassified,
            });
        }

        let bounded = apply_size_bounds(
            candidates,
            outliers,
            distances,
            config.min_cluster_size,
            config.max_cluster_size,
        );
        observer.observe(&ClusteringEvent::SizeBoundsApplied {
            truncated_members: bounded.truncated_members,
            demoted_clusters: bounded.demoted_clusters,
        });

        let exits = tree.point_exits();
        let clusters: Vec<HdbscanCluster> = bounded
            .clusters
            .into_iter()
            .filter_map(|c| {
                let tree_node = c.members.first().and_then(|&p| owner[p])?;
                let node = tree.node(tree_node)?;
                let lambda_max = node
                    .points
                    .iter()
                    .map(|&p| exits[p].1)
                    .fold(0.0, f64::max);
                Some(HdbscanCluster {
                    tree_node,
                    members: c.members,
                    stability: node.stability,
                    lambda_birth: node.lambda_birth,
                    lambda_max,
                })
            })
            .collect();

        let processing = ProcessingMetrics {
            point_count: n,
            mst_edge_count: mst.len(),
            tree_node_count: tree.len(),
            selected_cluster_count: clusters.len(),
            glosh_reclassified: reclassified,
            truncated_members: bounded.truncated_members,
            demoted_clusters: bounded.demoted_clusters,
            outlier_count: bounded.outliers.len(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        info!(
            points = n,
            min_pts,
            tree_nodes = tree.len(),
            clusters = clusters.len(),
            outliers = bounded.outliers.len(),
            reclassified,
            "hdbscan complete"
        );

        HdbscanResult {
            clusters,
            outliers: bounded.outliers,
            outlier_scores: scores,
            stability: tree.stability_scores(),
            selected,
            mst,
            tree,
            parameters,
            processing,
        }
    }
}
