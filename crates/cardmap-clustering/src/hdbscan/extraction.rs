//! Excess-of-mass flat cluster extraction.

use super::hierarchy::ClusterTree;

/// Select tree nodes bottom-up: a node is kept when its own stability is at least the
/// summed (propagated) stability of its children, which are then deselected.
/// The root is only eligible with `allow_single_cluster`.
///
/// Returns selected node ids, ascending. The selection is always an antichain.
pub fn excess_of_mass(tree: &ClusterTree, allow_single_cluster: bool) -> Vec<usize> {
    let count = tree.len();
    let mut selected = vec![false; count];
    let mut propagated = vec![0.0f64; count];

    for node in tree.nodes().iter().rev() {
        let id = node.id;
        let eligible = node.parent.is_some() || allow_single_cluster;
        let children_total: f64 = node.children.iter().map(|&c| propagated[c]).sum();

        if node.is_leaf() {
            selected[id] = eligible;
            propagated[id] = node.stability;
        } else if eligible && node.stability >= children_total {
            selected[id] = true;
            propagated[id] = node.stability;
            for d in tree.descendants(id) {
                selected[d] = false;
            }
        } else {
            propagated[id] = children_total;
        }
    }

    selected
        .iter()
        .enumerate()
        .filter(|(_, s)| **s)
        .map(|(id, _)| id)
        .collect()
}
