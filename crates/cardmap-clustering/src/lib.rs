//! # cardmap-clustering
//!
//! Partitions a board's cards into clusters and outliers.
//! DBSCAN with adaptive parameters, the full HDBSCAN pipeline (mutual reachability → MST →
//! condensed tree → excess-of-mass extraction → GLOSH), and average-linkage agglomerative
//! clustering, all behind [`IClusterer`](cardmap_core::traits::IClusterer).
//! [`ClusteringEngine`] runs the whole flow: similarity matrix, partition, labels, quality.

pub mod dbscan;
pub mod engine;
pub mod hdbscan;
pub mod hierarchical;
pub mod params;
pub mod quality;
pub mod registry;
pub mod size_policy;

pub use dbscan::DbscanClusterer;
pub use engine::ClusteringEngine;
pub use hdbscan::{HdbscanClusterer, HdbscanResult};
pub use hierarchical::HierarchicalClusterer;
pub use params::AdaptiveParameters;
pub use quality::{assess_quality, ClusterQualityEvaluator, QualityAssessment};
pub use registry::clusterer_for;
