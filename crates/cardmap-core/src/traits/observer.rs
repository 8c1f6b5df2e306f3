use crate::models::ClusteringAlgorithm;

/// Structured events emitted while a clustering call runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusteringEvent {
    RunStarted {
        algorithm: ClusteringAlgorithm,
        node_count: usize,
    },
    MatrixBuilt {
        node_count: usize,
        mean_similarity: f64,
    },
    ParametersDerived {
        eps: Option<f64>,
        min_pts: usize,
    },
    HierarchyBuilt {
        mst_edges: usize,
        tree_nodes: usize,
        selected_clusters: usize,
    },
    OutliersReclassified {
        count: usize,
    },
    SizeBoundsApplied {
        truncated_members: usize,
        demoted_clusters: usize,
    },
    LabelFallback {
        cluster_id: String,
        reason: String,
    },
    RunCompleted {
        algorithm: ClusteringAlgorithm,
        clusters: usize,
        outliers: usize,
        coverage_ratio: f64,
        avg_cohesion: f64,
        elapsed_ms: f64,
    },
}

/// Injectable observability hook.
pub trait IClusteringObserver: Send + Sync {
    fn observe(&self, event: &ClusteringEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IClusteringObserver for NoopObserver {
    fn observe(&self, _event: &ClusteringEvent) {}
}
