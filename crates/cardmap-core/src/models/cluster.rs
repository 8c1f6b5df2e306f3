use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Mean layout position of a cluster's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

/// Which labeling strategy produced a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LabelStrategy {
    SharedTag,
    KeywordPair,
    CoOccurrence,
    TopKeyword,
    SizeFallback,
    ErrorFallback,
}

/// Human-readable cluster label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterLabel {
    pub text: String,
    pub alternatives: Vec<String>,
    /// Confidence of the labeling strategy, not of cluster membership.
    pub label_confidence: f64,
    pub reasoning: String,
    pub strategy: LabelStrategy,
}

/// A labeled cluster as handed to board consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SmartCluster {
    pub id: String,
    pub node_ids: Vec<String>,
    pub centroid: Centroid,
    /// Mean intra-cluster pairwise similarity.
    pub cohesion: f64,
    /// Stability from the density hierarchy, when the algorithm has one.
    pub stability: Option<f64>,
    pub dominant_tags: Vec<String>,
    pub dominant_types: Vec<String>,
    pub label: ClusterLabel,
}

impl SmartCluster {
    pub fn size(&self) -> usize {
        self.node_ids.len()
    }
}
