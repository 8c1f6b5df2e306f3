use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clustering algorithm variants, selected once per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ClusteringAlgorithm {
    /// Classic density clustering with adaptive eps/minPts.
    #[default]
    Dbscan,
    /// Density hierarchy with stability-based extraction and GLOSH scoring.
    Hdbscan,
    /// Average-linkage agglomerative clustering.
    Hierarchical,
    /// Graph community detection. Not implemented.
    Community,
    /// Embedding-space topic clustering. Not implemented.
    Semantic,
}

impl ClusteringAlgorithm {
    pub fn all() -> [Self; 5] {
        [
            Self::Dbscan,
            Self::Hdbscan,
            Self::Hierarchical,
            Self::Community,
            Self::Semantic,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dbscan => "dbscan",
            Self::Hdbscan => "hdbscan",
            Self::Hierarchical => "hierarchical",
            Self::Community => "community",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for ClusteringAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
