//! # cardmap-core
//!
//! Foundation crate for the cardmap clustering engine.
//! Defines the board data model, clustering results, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClusteringConfig, EngineConfig};
pub use errors::{CardmapError, CardmapResult};
pub use models::{
    Card, ClusteringAlgorithm, ClusteringResult, DistanceMatrix, NetworkEdge, NetworkNode,
    Partition, SimilarityMatrix, SmartCluster,
};
