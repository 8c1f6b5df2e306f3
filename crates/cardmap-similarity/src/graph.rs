//! Relationship graph lookup for the edge signal.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use cardmap_core::models::{NetworkEdge, NetworkNode};
use petgraph::graphmap::UnGraphMap;

/// Undirected strength lookup keyed by node index. Parallel edges keep the strongest.
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    graph: UnGraphMap<usize, f64>,
    ignored_edges: usize,
    duplicate_node_ids: usize,
}

impl RelationshipGraph {
    /// Index `edges` against `nodes`. Self loops and edges to unknown nodes are skipped.
    ///
    /// A repeated node id resolves to its first occurrence; later nodes with the
    /// same id get no edges.
    pub fn build(nodes: &[NetworkNode], edges: &[NetworkEdge]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
        let mut duplicate_node_ids = 0;
        for (i, node) in nodes.iter().enumerate() {
            match index.entry(node.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) => duplicate_node_ids += 1,
            }
        }
        if duplicate_node_ids > 0 {
            tracing::warn!(
                duplicate_node_ids,
                "duplicate node ids; edges attach to the first node with each id"
            );
        }

        let mut graph = UnGraphMap::new();
        let mut ignored_edges = 0;
        for edge in edges {
            let (Some(&a), Some(&b)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) else {
                ignored_edges += 1;
                continue;
            };
            if a == b || !edge.strength.is_finite() {
                ignored_edges += 1;
                continue;
            }
            let strength = edge.strength.clamp(0.0, 1.0);
            match graph.edge_weight_mut(a, b) {
                Some(existing) => {
                    if strength > *existing {
                        *existing = strength;
                    }
                }
                None => {
                    graph.add_edge(a, b, strength);
                }
            }
        }

        if ignored_edges > 0 {
            tracing::debug!(ignored_edges, "skipped edges that do not connect two known nodes");
        }
        Self {
            graph,
            ignored_edges,
            duplicate_node_ids,
        }
    }

    /// Edge strength between two node indices, 0 when unconnected.
    pub fn strength(&self, a: usize, b: usize) -> f64 {
        self.graph.edge_weight(a, b).copied().unwrap_or(0.0)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_edges(&self) -> bool {
        self.graph.edge_count() > 0
    }

    pub fn degree(&self, node: usize) -> usize {
        if self.graph.contains_node(node) {
            self.graph.neighbors(node).count()
        } else {
            0
        }
    }

    pub fn ignored_edges(&self) -> usize {
        self.ignored_edges
    }

    pub fn duplicate_node_ids(&self) -> usize {
        self.duplicate_node_ids
    }
}
