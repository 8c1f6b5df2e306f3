//! Single-linkage dendrogram and the condensed cluster tree built from it.

use std::collections::BTreeMap;

use cardmap_core::constants::MIN_DENSITY_DISTANCE;
use petgraph::unionfind::UnionFind;

use super::mst::MstEdge;

/// Tree-node id → stability. Basis for flat-cluster selection.
pub type StabilityScores = BTreeMap<usize, f64>;

/// Density level of a distance: λ = 1 / max(d, 1e-6).
pub fn density_level(distance: f64) -> f64 {
    1.0 / distance.max(MIN_DENSITY_DISTANCE)
}

/// One merge of the dendrogram. Ids below the point count are points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    pub distance: f64,
    pub size: usize,
}

/// Binary merge tree over the points, from MST edges in increasing weight order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dendrogram {
    point_count: usize,
    merges: Vec<Merge>,
}

impl Dendrogram {
    pub fn from_mst(point_count: usize, mst: &[MstEdge]) -> Self {
        let mut edges = mst.to_vec();
        edges.sort_by(|x, y| x.weight.total_cmp(&y.weight));

        let mut components = UnionFind::<usize>::new(point_count);
        // dendrogram node currently representing each union-find root
        let mut node_of: Vec<usize> = (0..point_count).collect();
        let mut merges: Vec<Merge> = Vec::with_capacity(point_count.saturating_sub(1));

        for edge in edges {
            let (ra, rb) = (components.find(edge.a), components.find(edge.b));
            if ra == rb {
                continue;
            }
            let (left, right) = (node_of[ra], node_of[rb]);
            let size = Self::node_size(point_count, &merges, left)
                + Self::node_size(point_count, &merges, right);
            merges.push(Merge {
                left,
                right,
                distance: edge.weight,
                size,
            });
            components.union(ra, rb);
            let root = components.find(ra);
            node_of[root] = point_count + merges.len() - 1;
        }

        Self {
            point_count,
            merges,
        }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// The top merge, when every point is connected.
    pub fn root(&self) -> Option<usize> {
        if self.point_count >= 2 && self.merges.len() == self.point_count - 1 {
            Some(self.point_count + self.merges.len() - 1)
        } else {
            None
        }
    }

    pub fn merge(&self, node: usize) -> Option<&Merge> {
        node.checked_sub(self.point_count)
            .and_then(|i| self.merges.get(i))
    }

    pub fn size(&self, node: usize) -> usize {
        Self::node_size(self.point_count, &self.merges, node)
    }

    /// Points under a dendrogram node, ascending.
    pub fn leaves(&self, node: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            match self.merge(current) {
                Some(m) => {
                    stack.push(m.left);
                    stack.push(m.right);
                }
                None => out.push(current),
            }
        }
        out.sort_unstable();
        out
    }

    fn node_size(point_count: usize, merges: &[Merge], node: usize) -> usize {
        if node < point_count {
            1
        } else {
            merges.get(node - point_count).map_or(0, |m| m.size)
        }
    }
}

/// A cluster of the condensed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchicalClusterNode {
    pub id: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// Density level at which the cluster appears. The root is born at 0.
    pub lambda_birth: f64,
    /// Density level at which the cluster splits or its last points fall out.
    pub lambda_death: f64,
    pub stability: f64,
    /// Every point present at birth, ascending.
    pub points: Vec<usize>,
    /// Points that leave this cluster as noise, with the λ at which they leave.
    pub fallen: Vec<(usize, f64)>,
}

impl HierarchicalClusterNode {
    fn new(id: usize, parent: Option<usize>, lambda_birth: f64, points: Vec<usize>) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            lambda_birth,
            lambda_death: lambda_birth,
            stability: 0.0,
            points,
            fallen: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Condensed cluster tree. Node 0 is the root; children always have larger ids than parents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterTree {
    point_count: usize,
    nodes: Vec<HierarchicalClusterNode>,
}

impl ClusterTree {
    /// Condense a dendrogram: a split only creates new clusters when both sides have at
    /// least `min_cluster_size` points; smaller sides fall out of the current cluster.
    pub fn condense(dendrogram: &Dendrogram, min_cluster_size: usize) -> Self {
        let point_count = dendrogram.point_count();
        let Some(root) = dendrogram.root() else {
            return Self {
                point_count,
                nodes: Vec::new(),
            };
        };
        let mcs = min_cluster_size.max(2);

        let mut nodes = vec![HierarchicalClusterNode::new(
            0,
            None,
            0.0,
            (0..point_count).collect(),
        )];
        let mut stack = vec![(root, 0usize)];

        while let Some((dnode, cluster)) = stack.pop() {
            let Some(merge) = dendrogram.merge(dnode).copied() else {
                continue;
            };
            let lambda = density_level(merge.distance);
            let left_big = dendrogram.size(merge.left) >= mcs;
            let right_big = dendrogram.size(merge.right) >= mcs;
            nodes[cluster].lambda_death = lambda;

            match (left_big, right_big) {
                (true, true) => {
                    for side in [merge.left, merge.right] {
                        let id = nodes.len();
                        nodes.push(HierarchicalClusterNode::new(
                            id,
                            Some(cluster),
                            lambda,
                            dendrogram.leaves(side),
                        ));
                        nodes[cluster].children.push(id);
                        stack.push((side, id));
                    }
                }
                (true, false) => {
                    let fallen = dendrogram.leaves(merge.right);
                    nodes[cluster].fallen.extend(fallen.into_iter().map(|p| (p, lambda)));
                    stack.push((merge.left, cluster));
                }
                (false, true) => {
                    let fallen = dendrogram.leaves(merge.left);
                    nodes[cluster].fallen.extend(fallen.into_iter().map(|p| (p, lambda)));
                    stack.push((merge.right, cluster));
                }
                (false, false) => {
                    let fallen = dendrogram.leaves(dnode);
                    nodes[cluster].fallen.extend(fallen.into_iter().map(|p| (p, lambda)));
                }
            }
        }

        let mut tree = Self { point_count, nodes };
        tree.compute_stability();
        tree
    }

    /// Σ over fallen points of (λ_p − λ_birth) plus Σ over children of |child|·(λ_child − λ_birth).
    fn compute_stability(&mut self) {
        for id in 0..self.nodes.len() {
            let birth = self.nodes[id].lambda_birth;
            let from_points: f64 = self.nodes[id]
                .fallen
                .iter()
                .map(|&(_, lambda)| lambda - birth)
                .sum();
            let from_children: f64 = self.nodes[id]
                .children
                .iter()
                .map(|&c| self.nodes[c].size() as f64 * (self.nodes[c].lambda_birth - birth))
                .sum();
            self.nodes[id].stability = (from_points + from_children).max(0.0);
        }
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn nodes(&self) -> &[HierarchicalClusterNode] {
        &self.nodes
    }

    pub fn node(&self, id: usize) -> Option<&HierarchicalClusterNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn stability_scores(&self) -> StabilityScores {
        self.nodes.iter().map(|n| (n.id, n.stability)).collect()
    }

    /// All nodes strictly below `id`.
    pub fn descendants(&self, id: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack: Vec<usize> = self.node(id).map(|n| n.children.clone()).unwrap_or_default();
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(node) = self.node(current) {
                stack.extend(node.children.iter().copied());
            }
        }
        out
    }

    pub fn is_ancestor(&self, ancestor: usize, id: usize) -> bool {
        let mut current = self.node(id).and_then(|n| n.parent);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.node(p).and_then(|n| n.parent);
        }
        false
    }

    /// No selected node is an ancestor of another.
    pub fn is_antichain(&self, selected: &[usize]) -> bool {
        selected.iter().all(|&a| {
            selected
                .iter()
                .all(|&b| a == b || !self.is_ancestor(a, b))
        })
    }

    /// For each point, the node it finally falls out of and the λ at which it does.
    pub fn point_exits(&self) -> Vec<(usize, f64)> {
        let mut exits = vec![(0usize, 0.0f64); self.point_count];
        for node in &self.nodes {
            for &(p, lambda) in &node.fallen {
                if let Some(slot) = exits.get_mut(p) {
                    *slot = (node.id, lambda);
                }
            }
        }
        exits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hdbscan::mst::minimum_spanning_tree;
    use cardmap_core::models::DistanceMatrix;

    /// Two groups of three at distance 0.1 internally, 0.9 apart.
    fn two_groups() -> DistanceMatrix {
        let rows = (0..6)
            .map(|i| {
                (0..6)
                    .map(|j| {
                        if i == j {
                            0.0
                        } else if (i < 3) == (j < 3) {
                            0.1
                        } else {
                            0.9
                        }
                    })
                    .collect()
            })
            .collect();
        DistanceMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn dendrogram_merges_every_point() {
        let d = two_groups();
        let dendro = Dendrogram::from_mst(6, &minimum_spanning_tree(&d));
        assert_eq!(dendro.merges().len(), 5);
        assert_eq!(dendro.root(), Some(10));
        assert_eq!(dendro.size(10), 6);
        assert_eq!(dendro.leaves(10), vec![0, 1, 2, 3, 4, 5]);
        assert!((dendro.merge(10).unwrap().distance - 0.9).abs() < 1e-12);
    }

    #[test]
    fn condensed_tree_splits_into_two_children() {
        let d = two_groups();
        let dendro = Dendrogram::from_mst(6, &minimum_spanning_tree(&d));
        let tree = ClusterTree::condense(&dendro, 2);
        assert_eq!(tree.len(), 3);
        let root = tree.node(0).unwrap();
        assert_eq!(root.children, vec![1, 2]);
        assert!(root.fallen.is_empty());

        let birth = density_level(0.9);
        for id in [1, 2] {
            let child = tree.node(id).unwrap();
            assert_eq!(child.size(), 3);
            assert!((child.lambda_birth - birth).abs() < 1e-12);
            assert_eq!(child.fallen.len(), 3);
            let expected = 3.0 * (density_level(0.1) - birth);
            assert!((child.stability - expected).abs() < 1e-9);
        }
        assert!((root.stability - 6.0 * birth).abs() < 1e-9);
        assert!(tree.is_antichain(&[1, 2]));
        assert!(!tree.is_antichain(&[0, 1]));
    }

    #[test]
    fn every_point_exits_exactly_once() {
        let d = two_groups();
        let dendro = Dendrogram::from_mst(6, &minimum_spanning_tree(&d));
        let tree = ClusterTree::condense(&dendro, 2);
        let total: usize = tree.nodes().iter().map(|n| n.fallen.len()).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn too_few_points_give_an_empty_tree() {
        let dendro = Dendrogram::from_mst(1, &[]);
        assert!(ClusterTree::condense(&dendro, 2).is_empty());
    }
}
