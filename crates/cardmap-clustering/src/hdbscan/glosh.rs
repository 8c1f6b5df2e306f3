//! GLOSH outlier scores from the condensed tree.

use std::collections::BTreeMap;

use super::hierarchy::ClusterTree;

/// Per-point score `1 − λ_exit(p) / λ_max(C)`, clamped to [0, 1].
///
/// `C` is the selected cluster holding `p`, or the node `p` last belonged to when it is
/// in no selected cluster. `λ_max(C)` is the highest exit level among `C`'s points.
pub fn glosh_scores(tree: &ClusterTree, selected: &[usize]) -> Vec<f64> {
    let exits = tree.point_exits();
    let mut owner: Vec<Option<usize>> = vec![None; tree.point_count()];
    for &id in selected {
        if let Some(node) = tree.node(id) {
            for &p in &node.points {
                if let Some(slot) = owner.get_mut(p) {
                    *slot = Some(id);
                }
            }
        }
    }

    let mut lambda_max: BTreeMap<usize, f64> = BTreeMap::new();
    exits
        .iter()
        .enumerate()
        .map(|(p, &(exit_node, exit_lambda))| {
            let reference = owner[p].unwrap_or(exit_node);
            let max = *lambda_max
                .entry(reference)
                .or_insert_with(|| max_exit_lambda(tree, reference, &exits));
            if max <= 0.0 {
                0.0
            } else {
                (1.0 - exit_lambda / max).clamp(0.0, 1.0)
            }
        })
        .collect()
}

/// Split `members` into those kept and those reclassified as outliers.
/// A member leaves when its score exceeds `threshold` or reaches 1.
pub fn reclassify(members: &[usize], scores: &[f64], threshold: f64) -> (Vec<usize>, Vec<usize>) {
    members.iter().copied().partition(|&p| {
        let score = scores.get(p).copied().unwrap_or(0.0);
        !(score > threshold || score >= 1.0)
    })
}

fn max_exit_lambda(tree: &ClusterTree, node: usize, exits: &[(usize, f64)]) -> f64 {
    tree.node(node)
        .map(|n| {
            n.points
                .iter()
                .filter_map(|&p| exits.get(p))
                .map(|&(_, lambda)| lambda)
                .fold(0.0, f64::max)
        })
        .unwrap_or(0.0)
}
