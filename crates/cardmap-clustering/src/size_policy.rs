//! Cluster size bounds shared by every algorithm.
//!
//! Oversized clusters keep their most central members and shed the rest as outliers.
//! Undersized clusters are demoted to outliers entirely. Nothing is re-clustered.

use cardmap_core::models::{DistanceMatrix, PartitionCluster};

/// Result of applying size bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeBoundsOutcome {
    /// Size descending, then by first member. Members ascending.
    pub clusters: Vec<PartitionCluster>,
    /// Ascending.
    pub outliers: Vec<usize>,
    pub truncated_members: usize,
    pub demoted_clusters: usize,
}

pub fn apply_size_bounds(
    clusters: Vec<PartitionCluster>,
    mut outliers: Vec<usize>,
    distances: &DistanceMatrix,
    min_size: usize,
    max_size: usize,
) -> SizeBoundsOutcome {
    let mut kept = Vec::with_capacity(clusters.len());
    let mut truncated_members = 0;
    let mut demoted_clusters = 0;

    for mut cluster in clusters {
        if cluster.members.len() > max_size {
            let shed = truncate_to_core(&mut cluster.members, distances, max_size);
            truncated_members += shed.len();
            outliers.extend(shed);
        }
        if cluster.members.len() < min_size || cluster.members.is_empty() {
            demoted_clusters += 1;
            outliers.append(&mut cluster.members);
            continue;
        }
        cluster.members.sort_unstable();
        kept.push(cluster);
    }

    kept.sort_by(|a, b| {
        b.members
            .len()
            .cmp(&a.members.len())
            .then_with(|| a.members.first().cmp(&b.members.first()))
    });
    outliers.sort_unstable();
    outliers.dedup();

    if truncated_members > 0 || demoted_clusters > 0 {
        tracing::debug!(truncated_members, demoted_clusters, "applied cluster size bounds");
    }

    SizeBoundsOutcome {
        clusters: kept,
        outliers,
        truncated_members,
        demoted_clusters,
    }
}

/// Keep the `cap` members with the lowest mean distance to the rest (ties by index).
/// Returns the removed members.
fn truncate_to_core(members: &mut Vec<usize>, distances: &DistanceMatrix, cap: usize) -> Vec<usize> {
    let snapshot = members.clone();
    let mut ranked: Vec<(f64, usize)> = snapshot
        .iter()
        .map(|&m| (distances.mean_distance_to(m, &snapshot), m))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    let shed: Vec<usize> = ranked[cap..].iter().map(|&(_, m)| m).collect();
    *members = ranked[..cap].iter().map(|&(_, m)| m).collect();
    shed
}
