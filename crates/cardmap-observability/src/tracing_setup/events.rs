//! Structured log events for clustering runs.
//!
//! Each function emits a `tracing` event with structured fields.

use cardmap_core::models::ClusteringAlgorithm;
use cardmap_core::traits::ClusteringEvent;

/// Log the start of a clustering run.
pub fn run_started(algorithm: ClusteringAlgorithm, node_count: usize) {
    tracing::info!(
        event = "run_started",
        algorithm = %algorithm,
        node_count = node_count,
        "clustering run started"
    );
}

/// Log the pairwise similarity matrix summary.
pub fn matrix_built(node_count: usize, mean_similarity: f64) {
    tracing::debug!(
        event = "matrix_built",
        node_count = node_count,
        mean_similarity = mean_similarity,
        "similarity matrix built"
    );
}

/// Log the density parameters a clusterer derived.
pub fn parameters_derived(eps: Option<f64>, min_pts: usize) {
    tracing::debug!(
        event = "parameters_derived",
        eps = ?eps,
        min_pts = min_pts,
        "clustering parameters derived"
    );
}

/// Log the shape of an HDBSCAN hierarchy.
pub fn hierarchy_built(mst_edges: usize, tree_nodes: usize, selected_clusters: usize) {
    tracing::debug!(
        event = "hierarchy_built",
        mst_edges = mst_edges,
        tree_nodes = tree_nodes,
        selected_clusters = selected_clusters,
        "cluster hierarchy built"
    );
}

/// Log GLOSH reclassification.
pub fn outliers_reclassified(count: usize) {
    tracing::info!(
        event = "outliers_reclassified",
        count = count,
        "members reclassified as outliers"
    );
}

/// Log the effect of the cluster size bounds.
pub fn size_bounds_applied(truncated_members: usize, demoted_clusters: usize) {
    tracing::debug!(
        event = "size_bounds_applied",
        truncated_members = truncated_members,
        demoted_clusters = demoted_clusters,
        "cluster size bounds applied"
    );
}

/// Log a cluster that received the error fallback label.
pub fn label_fallback(cluster_id: &str, reason: &str) {
    tracing::warn!(
        event = "label_fallback",
        cluster_id = %cluster_id,
        reason = %reason,
        "label generation fell back"
    );
}

/// Log the completion of a clustering run.
pub fn run_completed(
    algorithm: ClusteringAlgorithm,
    clusters: usize,
    outliers: usize,
    coverage_ratio: f64,
    avg_cohesion: f64,
    elapsed_ms: f64,
) {
    tracing::info!(
        event = "run_completed",
        algorithm = %algorithm,
        clusters = clusters,
        outliers = outliers,
        coverage_ratio = coverage_ratio,
        avg_cohesion = avg_cohesion,
        elapsed_ms = elapsed_ms,
        "clustering run completed"
    );
}

/// Emit the log event matching a clustering event.
pub fn emit(event: &ClusteringEvent) {
    match event {
        ClusteringEvent::RunStarted {
            algorithm,
            node_count,
        } => run_started(*algorithm, *node_count),
        ClusteringEvent::MatrixBuilt {
            node_count,
            mean_similarity,
        } => matrix_built(*node_count, *mean_similarity),
        ClusteringEvent::ParametersDerived { eps, min_pts } => parameters_derived(*eps, *min_pts),
        ClusteringEvent::HierarchyBuilt {
            mst_edges,
            tree_nodes,
            selected_clusters,
        } => hierarchy_built(*mst_edges, *tree_nodes, *selected_clusters),
        ClusteringEvent::OutliersReclassified { count } => outliers_reclassified(*count),
        ClusteringEvent::SizeBoundsApplied {
            truncated_members,
            demoted_clusters,
        } => size_bounds_applied(*truncated_members, *demoted_clusters),
        ClusteringEvent::LabelFallback { cluster_id, reason } => label_fallback(cluster_id, reason),
        ClusteringEvent::RunCompleted {
            algorithm,
            clusters,
            outliers,
            coverage_ratio,
            avg_cohesion,
            elapsed_ms,
        } => run_completed(
            *algorithm,
            *clusters,
            *outliers,
            *coverage_ratio,
            *avg_cohesion,
            *elapsed_ms,
        ),
    }
}
