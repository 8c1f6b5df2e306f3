use proptest::prelude::*;

use cardmap_core::config::{ClusteringSignals, SignalConfig};
use cardmap_core::errors::{CardmapError, ClusteringError};
use cardmap_core::models::{Card, NetworkEdge, NetworkNode};
use cardmap_similarity::{DistanceModel, RelationshipGraph, SimilarityEngine};

fn cards_and_nodes(cards: Vec<Card>) -> (Vec<Card>, Vec<NetworkNode>) {
    let nodes = cards.iter().map(NetworkNode::from_card).collect();
    (cards, nodes)
}

#[test]
fn tags_only_matrix_is_tag_jaccard() {
    let (cards, nodes) = cards_and_nodes(vec![
        Card::new("a", "one").with_tags(["ux", "login"]),
        Card::new("b", "two").with_tags(["ux"]),
        Card::new("c", "three"),
    ]);
    let engine = SimilarityEngine::default();
    let signals = ClusteringSignals::tags_only();
    let graph = RelationshipGraph::build(&nodes, &[]);
    let m = DistanceModel::new(&engine, &signals)
        .similarity_matrix(&cards, &nodes, &graph)
        .unwrap();
    assert!((m.get(0, 1) - 0.5).abs() < 1e-12);
    // c has no tags but a does, so the signal applies and scores 0
    assert_eq!(m.get(0, 2), 0.0);
    assert_eq!(m.get(0, 0), 0.0);
    assert!(m.is_symmetric());
}

#[test]
fn untagged_pair_with_only_tag_signal_scores_zero() {
    let (cards, nodes) = cards_and_nodes(vec![Card::new("a", "x"), Card::new("b", "x")]);
    let engine = SimilarityEngine::default();
    let signals = ClusteringSignals::tags_only();
    let graph = RelationshipGraph::build(&nodes, &[]);
    let m = DistanceModel::new(&engine, &signals)
        .similarity_matrix(&cards, &nodes, &graph)
        .unwrap();
    assert_eq!(m.get(0, 1), 0.0);
}

#[test]
fn edges_contribute_only_when_graph_has_edges() {
    let (cards, nodes) = cards_and_nodes(vec![
        Card::new("a", "alpha"),
        Card::new("b", "beta"),
        Card::new("c", "gamma"),
    ]);
    let engine = SimilarityEngine::default();
    let signals = ClusteringSignals {
        semantic: SignalConfig::new(true, 0.5),
        tags: SignalConfig::new(false, 0.0),
        edges: SignalConfig::new(true, 0.5),
    };
    let graph = RelationshipGraph::build(&nodes, &[NetworkEdge::new("a", "b", 0.8)]);
    let m = DistanceModel::new(&engine, &signals)
        .similarity_matrix(&cards, &nodes, &graph)
        .unwrap();
    assert!((m.get(0, 1) - 0.4).abs() < 1e-12);
    assert_eq!(m.get(1, 2), 0.0);
}

#[test]
fn semantic_only_matches_engine_overall() {
    let (cards, nodes) = cards_and_nodes(vec![
        Card::new("a", "search is slow").with_tags(["perf"]),
        Card::new("b", "search index stale").with_tags(["perf"]),
    ]);
    let engine = SimilarityEngine::default();
    let signals = ClusteringSignals::semantic_only();
    let graph = RelationshipGraph::build(&nodes, &[]);
    let m = DistanceModel::new(&engine, &signals)
        .similarity_matrix(&cards, &nodes, &graph)
        .unwrap();
    let direct = engine.similarity(&cards[0], &cards[1]).unwrap().overall_score;
    assert!((m.get(0, 1) - direct).abs() < 1e-12);
}

#[test]
fn mismatched_inputs_are_rejected() {
    let cards = vec![Card::new("a", "x")];
    let nodes: Vec<NetworkNode> = Vec::new();
    let engine = SimilarityEngine::default();
    let signals = ClusteringSignals::default();
    let graph = RelationshipGraph::default();
    let err = DistanceModel::new(&engine, &signals)
        .similarity_matrix(&cards, &nodes, &graph)
        .unwrap_err();
    assert!(matches!(
        err,
        CardmapError::ClusteringError(ClusteringError::MatrixShape { .. })
    ));
}

const WORDS: &[&str] = &[
    "login", "search", "payment", "dashboard", "export", "mobile", "latency", "billing",
];
const TAGS: &[&str] = &["ux", "perf", "bug", "infra"];

fn arb_card() -> impl Strategy<Value = Card> {
    (
        prop::collection::vec(prop::sample::select(WORDS), 1..4),
        prop::collection::vec(prop::sample::select(TAGS), 0..3),
    )
        .prop_map(|(words, tags)| {
            Card::new(uuid::Uuid::new_v4().to_string(), words.join(" ")).with_tags(tags)
        })
}

proptest! {
    #[test]
    fn matrix_is_symmetric_with_zero_diagonal(cards in prop::collection::vec(arb_card(), 0..12)) {
        let nodes: Vec<NetworkNode> = cards.iter().map(NetworkNode::from_card).collect();
        let edges: Vec<NetworkEdge> = nodes
            .windows(2)
            .map(|w| NetworkEdge::new(w[0].id.clone(), w[1].id.clone(), 0.6))
            .collect();
        let engine = SimilarityEngine::default();
        let signals = ClusteringSignals::default();
        let graph = RelationshipGraph::build(&nodes, &edges);
        let m = DistanceModel::new(&engine, &signals)
            .similarity_matrix(&cards, &nodes, &graph)
            .unwrap();
        prop_assert!(m.is_symmetric());
        let d = m.to_distances();
        for i in 0..d.len() {
            prop_assert_eq!(d.get(i, i), 0.0);
            for j in 0..d.len() {
                prop_assert!((0.0..=1.0).contains(&d.get(i, j)));
            }
        }
    }
}
