//! Selects the clusterer for an algorithm variant.

use cardmap_core::errors::{CardmapResult, ClusteringError};
use cardmap_core::models::ClusteringAlgorithm;
use cardmap_core::traits::IClusterer;

use crate::dbscan::DbscanClusterer;
use crate::hdbscan::HdbscanClusterer;
use crate::hierarchical::HierarchicalClusterer;

/// The clusterer for `algorithm`. Variants without an implementation fail here, before any work.
pub fn clusterer_for(algorithm: ClusteringAlgorithm) -> CardmapResult<Box<dyn IClusterer>> {
    match algorithm {
        ClusteringAlgorithm::Dbscan => Ok(Box::new(DbscanClusterer::new())),
        ClusteringAlgorithm::Hdbscan => Ok(Box::new(HdbscanClusterer::new())),
        ClusteringAlgorithm::Hierarchical => Ok(Box::new(HierarchicalClusterer::new())),
        ClusteringAlgorithm::Community | ClusteringAlgorithm::Semantic => {
            Err(ClusteringError::UnsupportedAlgorithm {
                algorithm: algorithm.as_str().to_string(),
            }
            .into())
        }
    }
}
