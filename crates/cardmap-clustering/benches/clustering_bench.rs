use criterion::{criterion_group, criterion_main, Criterion};

use cardmap_clustering::{DbscanClusterer, HdbscanClusterer};
use cardmap_core::config::ClusteringConfig;
use cardmap_core::models::{Card, DistanceMatrix, NetworkNode};
use cardmap_core::traits::{IClusterer, NoopObserver};
use cardmap_similarity::{DistanceModel, RelationshipGraph, SimilarityEngine};

const THEMES: [(&str, &str); 5] = [
    ("ux", "onboarding screen confusing button layout"),
    ("infra", "deploy pipeline runners disk alerting"),
    ("search", "search results typos filters queries"),
    ("billing", "invoice payment checkout refund"),
    ("docs", "documentation examples tutorial reference"),
];

/// `n` cards spread round-robin over five themes.
fn board(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| {
            let (tag, words) = THEMES[i % THEMES.len()];
            Card::new(format!("card-{i}"), format!("{words} {i}"))
                .with_content(format!("Card {i} about {tag}: {words}"))
                .with_tags([tag])
        })
        .collect()
}

fn distances(cards: &[Card]) -> DistanceMatrix {
    let engine = SimilarityEngine::default();
    let config = ClusteringConfig::default();
    let nodes: Vec<NetworkNode> = cards.iter().map(NetworkNode::from_card).collect();
    let graph = RelationshipGraph::build(&nodes, &[]);
    DistanceModel::new(&engine, &config.signals)
        .similarity_matrix(cards, &nodes, &graph)
        .unwrap()
        .to_distances()
}

fn bench_similarity_matrix(c: &mut Criterion) {
    let cards = board(150);
    let nodes: Vec<NetworkNode> = cards.iter().map(NetworkNode::from_card).collect();
    let graph = RelationshipGraph::build(&nodes, &[]);
    let engine = SimilarityEngine::default();
    let config = ClusteringConfig::default();
    let model = DistanceModel::new(&engine, &config.signals);

    c.bench_function("similarity_matrix_150_cards", |b| {
        b.iter(|| model.similarity_matrix(&cards, &nodes, &graph).unwrap());
    });
}

fn bench_dbscan(c: &mut Criterion) {
    let d = distances(&board(150));
    let config = ClusteringConfig::default();
    let clusterer = DbscanClusterer::new();

    c.bench_function("dbscan_150_cards", |b| {
        b.iter(|| clusterer.cluster(&d, &config, &NoopObserver).unwrap());
    });
}

fn bench_hdbscan(c: &mut Criterion) {
    let d = distances(&board(150));
    let config = ClusteringConfig::default();
    let clusterer = HdbscanClusterer::new();

    c.bench_function("hdbscan_150_cards", |b| {
        b.iter(|| clusterer.run(&d, &config, &NoopObserver));
    });
}

criterion_group!(benches, bench_similarity_matrix, bench_dbscan, bench_hdbscan);
criterion_main!(benches);
