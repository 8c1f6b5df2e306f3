//! Property tests over random distance matrices.

use proptest::prelude::*;

use cardmap_clustering::{clusterer_for, ClusterQualityEvaluator, HdbscanClusterer};
use cardmap_core::config::ClusteringConfig;
use cardmap_core::models::{ClusteringAlgorithm, DistanceMatrix, SimilarityMatrix};
use cardmap_core::traits::NoopObserver;

fn similarity_from_upper(n: usize, upper: &[f64]) -> SimilarityMatrix {
    let mut s = SimilarityMatrix::zeros(n);
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            s.set(i, j, upper[k]);
            k += 1;
        }
    }
    s
}

fn similarity_matrix() -> impl Strategy<Value = SimilarityMatrix> {
    (0usize..18).prop_flat_map(|n| {
        prop::collection::vec(0.0f64..=1.0, n * n.saturating_sub(1) / 2)
            .prop_map(move |upper| similarity_from_upper(n, &upper))
    })
}

fn distance_matrix() -> impl Strategy<Value = DistanceMatrix> {
    similarity_matrix().prop_map(|s| s.to_distances())
}

fn config(min: usize, extra: usize, threshold: f64) -> ClusteringConfig {
    ClusteringConfig::default()
        .with_size_bounds(min, min + extra)
        .with_similarity_threshold(threshold)
}

proptest! {
    #[test]
    fn every_point_lands_exactly_once(
        d in distance_matrix(),
        min in 1usize..4,
        extra in 0usize..6,
        threshold in 0.0f64..=1.0,
    ) {
        for algorithm in [
            ClusteringAlgorithm::Dbscan,
            ClusteringAlgorithm::Hdbscan,
            ClusteringAlgorithm::Hierarchical,
        ] {
            let config = config(min, extra, threshold).with_algorithm(algorithm);
            let partition = clusterer_for(algorithm)
                .unwrap()
                .cluster(&d, &config, &NoopObserver)
                .unwrap();
            prop_assert!(partition.covers_exactly(d.len()), "{}", algorithm);
        }
    }

    #[test]
    fn clusters_respect_size_bounds(
        d in distance_matrix(),
        min in 1usize..4,
        extra in 0usize..6,
        threshold in 0.0f64..=1.0,
    ) {
        for algorithm in [
            ClusteringAlgorithm::Dbscan,
            ClusteringAlgorithm::Hdbscan,
            ClusteringAlgorithm::Hierarchical,
        ] {
            let config = config(min, extra, threshold).with_algorithm(algorithm);
            let partition = clusterer_for(algorithm)
                .unwrap()
                .cluster(&d, &config, &NoopObserver)
                .unwrap();
            for cluster in &partition.clusters {
                prop_assert!(cluster.len() >= min && cluster.len() <= min + extra, "{}", algorithm);
            }
        }
    }

    #[test]
    fn hdbscan_selection_is_an_antichain(d in distance_matrix(), min in 1usize..4) {
        let result = HdbscanClusterer::new().run(&d, &config(min, 20, 0.5), &NoopObserver);
        prop_assert!(result.tree.is_antichain(&result.selected));
    }

    #[test]
    fn glosh_scores_are_bounded_and_full_scores_excluded(d in distance_matrix(), min in 1usize..4) {
        let result = HdbscanClusterer::new().run(&d, &config(min, 20, 0.5), &NoopObserver);
        for (point, &score) in result.outlier_scores.iter().enumerate() {
            prop_assert!((0.0..=1.0).contains(&score));
            if score >= 1.0 {
                prop_assert!(result.clusters.iter().all(|c| !c.members.contains(&point)));
            }
        }
    }

    #[test]
    fn quality_evaluation_is_idempotent(s in similarity_matrix(), min in 1usize..4) {
        let d = s.to_distances();
        let partition = clusterer_for(ClusteringAlgorithm::Dbscan)
            .unwrap()
            .cluster(&d, &config(min, 10, 0.5), &NoopObserver)
            .unwrap();
        let evaluator = ClusterQualityEvaluator::new();
        let first = evaluator.evaluate(&partition, &s);
        let second = evaluator.evaluate(&partition, &s);
        prop_assert_eq!(&first, &second);
        prop_assert!((0.0..=1.0).contains(&first.coverage_ratio));
        prop_assert_eq!(first.cluster_count, partition.clusters.len());
    }
}
