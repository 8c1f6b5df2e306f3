//! HDBSCAN: density hierarchy clustering with stability-based extraction and GLOSH outliers.
//!
//! Stages, each a pure function over the previous stage's output:
//!
//! 1. [`mutual_reachability`]: core distances and the reweighted distance matrix.
//! 2. [`mst`]: Kruskal minimum spanning tree over mutual reachability.
//! 3. [`hierarchy`]: single-linkage dendrogram, condensed into a [`ClusterTree`] with stabilities.
//! 4. [`extraction`]: excess-of-mass selection of an antichain of tree nodes.
//! 5. [`glosh`]: per-point outlier scores and reclassification.
//!
//! [`HdbscanClusterer`] runs the stages and the size policy; [`provider`] adapts the
//! result into the algorithm-agnostic [`Partition`](cardmap_core::models::Partition).

pub mod clusterer;
pub mod extraction;
pub mod glosh;
pub mod hierarchy;
pub mod mst;
pub mod mutual_reachability;
pub mod provider;

pub use clusterer::{HdbscanCluster, HdbscanClusterer, HdbscanResult};
pub use hierarchy::{ClusterTree, HierarchicalClusterNode, StabilityScores};
pub use mst::MstEdge;
