use cardmap_core::config::*;
use cardmap_core::errors::CardmapError;
use cardmap_core::models::{ClusteringAlgorithm, SimilarityWeights};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = EngineConfig::from_toml("").unwrap();

    // Clustering defaults
    assert_eq!(config.clustering.algorithm, ClusteringAlgorithm::Dbscan);
    assert_eq!(config.clustering.min_cluster_size, 2);
    assert_eq!(config.clustering.max_cluster_size, 20);
    assert_eq!(config.clustering.similarity_threshold, 0.5);
    assert_eq!(config.clustering.signals.semantic.weight, 0.5);
    assert_eq!(config.clustering.signals.tags.weight, 0.3);
    assert_eq!(config.clustering.signals.edges.weight, 0.2);
    assert_eq!(config.clustering.hdbscan.glosh_threshold, 0.9);
    assert!(!config.clustering.hdbscan.allow_single_cluster);

    // Similarity defaults
    assert_eq!(config.similarity.profile, WeightProfile::Generic);
    assert!(config.similarity.weights.is_none());

    // Labeling defaults
    assert!(config.labeling.dictionary_path.is_none());
    assert_eq!(config.labeling.max_alternatives, 3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[clustering]
algorithm = "hdbscan"
max_cluster_size = 12

[clustering.signals.tags]
weight = 1.0

[similarity]
profile = "ai_suggestion"
"#;
    let config = EngineConfig::from_toml(toml).unwrap();
    assert_eq!(config.clustering.algorithm, ClusteringAlgorithm::Hdbscan);
    assert_eq!(config.clustering.max_cluster_size, 12);
    assert_eq!(config.clustering.signals.tags.weight, 1.0);
    assert!(config.clustering.signals.tags.enabled);
    // Non-overridden fields keep defaults
    assert_eq!(config.clustering.min_cluster_size, 2);
    assert_eq!(config.clustering.signals.semantic.weight, 0.5);
    assert_eq!(
        config.similarity.effective_weights(),
        SimilarityWeights::ai_suggestion()
    );
}

#[test]
fn explicit_weights_override_the_profile() {
    let toml = r#"
[similarity]
profile = "ai_suggestion"

[similarity.weights]
semantic = 1.0
structural = 0.0
contextual = 0.0
content = 0.0
"#;
    let config = EngineConfig::from_toml(toml).unwrap();
    assert_eq!(config.similarity.effective_weights().semantic, 1.0);
    assert_eq!(config.similarity.effective_weights().structural, 0.0);
}

#[test]
fn inverted_size_bounds_are_rejected() {
    let toml = r#"
[clustering]
min_cluster_size = 5
max_cluster_size = 3
"#;
    let err = EngineConfig::from_toml(toml).unwrap_err();
    match err {
        CardmapError::InvalidConfig { field, .. } => assert_eq!(field, "max_cluster_size"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn threshold_outside_unit_interval_is_rejected() {
    let config = ClusteringConfig::default().with_similarity_threshold(1.5);
    assert!(config.validate().is_err());
}

#[test]
fn negative_signal_weight_is_rejected() {
    let mut config = ClusteringConfig::default();
    config.signals.edges.weight = -0.1;
    assert!(config.validate().is_err());
}

#[test]
fn all_zero_similarity_weights_are_rejected() {
    let config = SimilarityConfig {
        profile: WeightProfile::Generic,
        weights: Some(SimilarityWeights {
            semantic: 0.0,
            structural: 0.0,
            contextual: 0.0,
            content: 0.0,
        }),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = EngineConfig::from_toml("[clustering\nalgorithm = 3").unwrap_err();
    assert!(matches!(err, CardmapError::ConfigError { .. }));
}

#[test]
fn unknown_algorithm_name_is_a_config_error() {
    let err = EngineConfig::from_toml("[clustering]\nalgorithm = \"kmeans\"").unwrap_err();
    assert!(matches!(err, CardmapError::ConfigError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = EngineConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = EngineConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.clustering, config.clustering);
    assert_eq!(
        roundtripped.labeling.max_alternatives,
        config.labeling.max_alternatives
    );
}

#[test]
fn from_file_reports_missing_path() {
    let err = EngineConfig::from_file("/definitely/not/here/cardmap.toml").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("cardmap.toml"));
}
