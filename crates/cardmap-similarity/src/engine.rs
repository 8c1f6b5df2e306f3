//! Pairwise card similarity from four weighted signals.

use cardmap_core::config::{SimilarityConfig, WeightProfile};
use cardmap_core::errors::{CardmapResult, SimilarityError};
use cardmap_core::models::{Card, SimilarityComponents, SimilarityScore, SimilarityWeights};
use cardmap_core::traits::ISemanticSimilarity;

use crate::components;
use crate::lexical::LexicalOverlap;
use crate::tokenize::StopWords;

const STRONG_THRESHOLD: f64 = 0.7;
const RELATED_THRESHOLD: f64 = 0.4;

/// Scores card pairs. Stateless apart from its weights, stop words, and semantic provider.
pub struct SimilarityEngine {
    weights: SimilarityWeights,
    stop_words: StopWords,
    semantic: Box<dyn ISemanticSimilarity>,
    custom_semantic: bool,
}

impl SimilarityEngine {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self {
            weights,
            stop_words: StopWords::bundled().clone(),
            semantic: Box::new(LexicalOverlap::default()),
            custom_semantic: false,
        }
    }

    pub fn for_profile(profile: WeightProfile) -> Self {
        Self::new(SimilarityWeights::for_profile(profile))
    }

    /// Configured weights, with `extra_stop_words` added to the bundled list.
    pub fn from_config(config: &SimilarityConfig) -> Self {
        let stop_words = StopWords::bundled()
            .clone()
            .with_words(&config.extra_stop_words);
        Self::new(config.effective_weights()).with_stop_words(stop_words)
    }

    /// Replace the semantic signal. Provider errors surface from [`Self::similarity`] unchanged.
    #[must_use]
    pub fn with_semantic_provider(mut self, provider: Box<dyn ISemanticSimilarity>) -> Self {
        self.semantic = provider;
        self.custom_semantic = true;
        self
    }

    /// Stop words for the content signal, and for the lexical provider unless a
    /// custom provider has been set.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        if !self.custom_semantic {
            self.semantic = Box::new(LexicalOverlap::new(stop_words.clone()));
        }
        self.stop_words = stop_words;
        self
    }

    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn semantic_provider_name(&self) -> &str {
        self.semantic.name()
    }

    /// Similarity of two cards. Identical cards always score 1.
    pub fn similarity(&self, a: &Card, b: &Card) -> CardmapResult<SimilarityScore> {
        let semantic = self.semantic.semantic_similarity(a, b)?;
        if !semantic.is_finite() {
            return Err(SimilarityError::InvalidScore {
                provider: self.semantic.name().to_string(),
                value: semantic,
            }
            .into());
        }

        let components = SimilarityComponents {
            semantic: semantic.clamp(0.0, 1.0),
            structural: components::structural(a, b),
            contextual: components::contextual(a, b),
            content: components::content(a, b, &self.stop_words),
        };

        if components::is_identical(a, b) {
            return Ok(SimilarityScore {
                overall_score: 1.0,
                components,
                weights: self.weights,
                confidence: 1.0,
                explanation: "cards are identical".to_string(),
            });
        }

        let overall_score = components.weighted(&self.weights);
        Ok(SimilarityScore {
            overall_score,
            components,
            weights: self.weights,
            confidence: confidence(&components),
            explanation: explain(overall_score, &components),
        })
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new(SimilarityWeights::generic())
    }
}

/// Agreement between components, blended with the strongest one.
fn confidence(components: &SimilarityComponents) -> f64 {
    let values = components.as_array();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    let max = values.iter().copied().fold(0.0, f64::max);
    (((1.0 - 2.0 * variance) + max) / 2.0).clamp(0.0, 1.0)
}

fn explain(overall: f64, c: &SimilarityComponents) -> String {
    let verdict = if overall >= STRONG_THRESHOLD {
        "strongly related"
    } else if overall >= RELATED_THRESHOLD {
        "related"
    } else if overall > 0.0 {
        "weakly related"
    } else {
        "unrelated"
    };
    let named = [
        ("semantic", c.semantic),
        ("structural", c.structural),
        ("contextual", c.contextual),
        ("content", c.content),
    ];
    let (name, value) = named
        .iter()
        .copied()
        .fold(named[0], |best, cur| if cur.1 > best.1 { cur } else { best });
    format!("{verdict} (overall {overall:.2}); strongest signal: {name} {value:.2}")
}
