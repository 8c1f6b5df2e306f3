//! Kruskal minimum spanning tree over a complete distance graph.

use cardmap_core::models::DistanceMatrix;
use petgraph::unionfind::UnionFind;

/// One MST edge. `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstEdge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

/// Minimum spanning tree edges in increasing weight order (ties by endpoints).
/// O(n² log n); fine at board scale.
pub fn minimum_spanning_tree(distances: &DistanceMatrix) -> Vec<MstEdge> {
    let n = distances.len();
    if n < 2 {
        return Vec::new();
    }

    let mut candidates: Vec<MstEdge> = Vec::with_capacity(n * (n - 1) / 2);
    for a in 0..n {
        for b in (a + 1)..n {
            candidates.push(MstEdge {
                a,
                b,
                weight: distances.get(a, b),
            });
        }
    }
    candidates.sort_by(|x, y| {
        x.weight
            .total_cmp(&y.weight)
            .then(x.a.cmp(&y.a))
            .then(x.b.cmp(&y.b))
    });

    let mut components = UnionFind::<usize>::new(n);
    let mut tree = Vec::with_capacity(n - 1);
    for edge in candidates {
        if components.union(edge.a, edge.b) {
            tree.push(edge);
            if tree.len() == n - 1 {
                break;
            }
        }
    }
    tree
}
