use chrono::{Duration, TimeZone, Utc};

use cardmap_core::config::WeightProfile;
use cardmap_core::errors::{CardmapError, CardmapResult, EmbeddingError, SimilarityError};
use cardmap_core::models::Card;
use cardmap_core::traits::{IEmbeddingProvider, ISemanticSimilarity};
use cardmap_similarity::{EmbeddingSimilarity, SimilarityEngine};

/// Bag-of-words embedding: each significant word hashes into one of 64 buckets.
struct HashedBagProvider;

impl IEmbeddingProvider for HashedBagProvider {
    fn embed(&self, text: &str) -> CardmapResult<Vec<f32>> {
        let mut v = vec![0.0f32; 64];
        for word in cardmap_similarity::tokenize::significant_words(text) {
            let hash = blake3::hash(word.as_bytes());
            let bucket = hash.as_bytes()[0] as usize % 64;
            v[bucket] += 1.0;
        }
        Ok(v)
    }

    fn dimensions(&self) -> usize {
        64
    }

    fn name(&self) -> &str {
        "hashed-bag"
    }
}

struct FailingProvider;

impl ISemanticSimilarity for FailingProvider {
    fn semantic_similarity(&self, _a: &Card, _b: &Card) -> CardmapResult<f64> {
        Err(SimilarityError::ProviderFailed {
            provider: "remote".into(),
            reason: "timeout".into(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "remote"
    }
}

struct NanProvider;

impl ISemanticSimilarity for NanProvider {
    fn semantic_similarity(&self, _a: &Card, _b: &Card) -> CardmapResult<f64> {
        Ok(f64::NAN)
    }

    fn name(&self) -> &str {
        "nan"
    }
}

struct UnavailableEmbedder;

impl IEmbeddingProvider for UnavailableEmbedder {
    fn embed(&self, _text: &str) -> CardmapResult<Vec<f32>> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: "offline".into(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[test]
fn identical_cards_score_one() {
    let engine = SimilarityEngine::default();
    let a = Card::new("a", "Dark mode toggle")
        .with_content("Add a switch in settings")
        .with_tags(["ui"]);
    let b = Card::new("b", "dark mode toggle")
        .with_content("add a switch in settings")
        .with_tags(["UI"]);
    let score = engine.similarity(&a, &b).unwrap();
    assert_eq!(score.overall_score, 1.0);
}

#[test]
fn a_card_is_identical_to_itself() {
    let engine = SimilarityEngine::default();
    let a = Card::new("a", "Anything at all");
    assert_eq!(engine.similarity(&a, &a).unwrap().overall_score, 1.0);
}

#[test]
fn unrelated_cards_score_zero() {
    let engine = SimilarityEngine::default();
    let a = Card::new("a", "Checkout crashes");
    let b = Card::new("b", "Team offsite agenda");
    let score = engine.similarity(&a, &b).unwrap();
    assert_eq!(score.overall_score, 0.0);
    assert!(score.explanation.starts_with("unrelated"));
}

#[test]
fn components_and_overall_stay_in_unit_range() {
    let t = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
    let engine = SimilarityEngine::default();
    let a = Card::new("a", "Slow search results")
        .with_content("Search takes ten seconds")
        .with_tags(["search", "perf"])
        .with_column("issues")
        .with_author("kim", t);
    let b = Card::new("b", "Search indexing")
        .with_content("Rebuild search index nightly")
        .with_tags(["search"])
        .with_column("issues")
        .with_author("kim", t + Duration::minutes(30));
    let score = engine.similarity(&a, &b).unwrap();
    for v in score.components.as_array() {
        assert!((0.0..=1.0).contains(&v));
    }
    assert!(score.overall_score > 0.0 && score.overall_score < 1.0);
    assert!((0.0..=1.0).contains(&score.confidence));
    assert!((score.components.contextual - 0.7).abs() < 1e-12);
}

#[test]
fn empty_tags_give_zero_tag_share() {
    let engine = SimilarityEngine::default();
    let a = Card::new("a", "alpha");
    let b = Card::new("b", "beta");
    let score = engine.similarity(&a, &b).unwrap();
    assert_eq!(score.components.structural, 0.0);
}

#[test]
fn ai_profile_weights_semantic_more() {
    let a = Card::new("a", "login error").with_column("issues");
    let b = Card::new("b", "login timeout").with_column("ideas");
    let generic = SimilarityEngine::for_profile(WeightProfile::Generic)
        .similarity(&a, &b)
        .unwrap();
    let ai = SimilarityEngine::for_profile(WeightProfile::AiSuggestion)
        .similarity(&a, &b)
        .unwrap();
    assert_eq!(generic.components, ai.components);
    assert!(ai.overall_score > generic.overall_score);
}

#[test]
fn provider_errors_propagate_unchanged() {
    let engine = SimilarityEngine::default().with_semantic_provider(Box::new(FailingProvider));
    let err = engine
        .similarity(&Card::new("a", "x"), &Card::new("b", "y"))
        .unwrap_err();
    assert!(matches!(
        err,
        CardmapError::SimilarityError(SimilarityError::ProviderFailed { .. })
    ));
}

#[test]
fn non_finite_provider_score_is_rejected() {
    let engine = SimilarityEngine::default().with_semantic_provider(Box::new(NanProvider));
    let err = engine
        .similarity(&Card::new("a", "x"), &Card::new("b", "y"))
        .unwrap_err();
    assert!(matches!(
        err,
        CardmapError::SimilarityError(SimilarityError::InvalidScore { .. })
    ));
}

#[test]
fn embedding_adapter_scores_shared_vocabulary() {
    let engine = SimilarityEngine::default()
        .with_semantic_provider(Box::new(EmbeddingSimilarity::new(Box::new(HashedBagProvider))));
    assert_eq!(engine.semantic_provider_name(), "hashed-bag");
    let a = Card::new("a", "payment gateway timeout");
    let b = Card::new("b", "payment gateway retries");
    let score = engine.similarity(&a, &b).unwrap();
    assert!(score.components.semantic > 0.5);
}

#[test]
fn embedding_errors_propagate() {
    let engine = SimilarityEngine::default()
        .with_semantic_provider(Box::new(EmbeddingSimilarity::new(Box::new(UnavailableEmbedder))));
    let err = engine
        .similarity(&Card::new("a", "x"), &Card::new("b", "y"))
        .unwrap_err();
    assert!(matches!(
        err,
        CardmapError::EmbeddingError(EmbeddingError::ProviderUnavailable { .. })
    ));
}
