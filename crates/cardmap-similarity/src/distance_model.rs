//! Builds the combined similarity matrix that clustering runs on.

use std::collections::BTreeSet;

use cardmap_core::config::ClusteringSignals;
use cardmap_core::errors::{CardmapResult, ClusteringError};
use cardmap_core::models::card::normalize_tags;
use cardmap_core::models::{Card, NetworkNode, SimilarityMatrix};

use crate::engine::SimilarityEngine;
use crate::graph::RelationshipGraph;
use crate::tokenize::jaccard;

/// Combines the card similarity, tag overlap, and relationship strength into one matrix.
///
/// A signal only contributes to a pair when it is enabled, has positive weight, and
/// has data for that pair: tags need at least one tagged node, edges need a non-empty graph.
/// The result is normalised by the weights that actually contributed.
pub struct DistanceModel<'a> {
    engine: &'a SimilarityEngine,
    signals: &'a ClusteringSignals,
}

impl<'a> DistanceModel<'a> {
    pub fn new(engine: &'a SimilarityEngine, signals: &'a ClusteringSignals) -> Self {
        Self { engine, signals }
    }

    /// `cards[i]` must describe `nodes[i]`.
    pub fn similarity_matrix(
        &self,
        cards: &[Card],
        nodes: &[NetworkNode],
        graph: &RelationshipGraph,
    ) -> CardmapResult<SimilarityMatrix> {
        if cards.len() != nodes.len() {
            return Err(ClusteringError::MatrixShape {
                expected: nodes.len(),
                actual: cards.len(),
            }
            .into());
        }

        let tags: Vec<BTreeSet<String>> = cards
            .iter()
            .zip(nodes)
            .map(|(card, node)| {
                let mut all = node.tags.clone();
                all.extend(card.tags.iter().cloned());
                normalize_tags(&all).into_iter().collect()
            })
            .collect();

        let n = nodes.len();
        let mut matrix = SimilarityMatrix::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let s = self.pair(i, j, cards, &tags, graph)?;
                matrix.set(i, j, s);
            }
        }
        Ok(matrix)
    }

    fn pair(
        &self,
        i: usize,
        j: usize,
        cards: &[Card],
        tags: &[BTreeSet<String>],
        graph: &RelationshipGraph,
    ) -> CardmapResult<f64> {
        let mut weighted = 0.0;
        let mut total = 0.0;

        let semantic = &self.signals.semantic;
        if semantic.is_active() {
            let score = self.engine.similarity(&cards[i], &cards[j])?;
            weighted += semantic.weight * score.overall_score;
            total += semantic.weight;
        }

        let tag_signal = &self.signals.tags;
        if tag_signal.is_active() && (!tags[i].is_empty() || !tags[j].is_empty()) {
            weighted += tag_signal.weight * jaccard(&tags[i], &tags[j]);
            total += tag_signal.weight;
        }

        let edge_signal = &self.signals.edges;
        if edge_signal.is_active() && graph.has_edges() {
            weighted += edge_signal.weight * graph.strength(i, j);
            total += edge_signal.weight;
        }

        if total > 0.0 {
            Ok((weighted / total).clamp(0.0, 1.0))
        } else {
            Ok(0.0)
        }
    }
}
