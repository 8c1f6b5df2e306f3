use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::config::WeightProfile;

/// Component weights for the overall similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarityWeights {
    pub semantic: f64,
    pub structural: f64,
    pub contextual: f64,
    pub content: f64,
}

impl SimilarityWeights {
    pub fn generic() -> Self {
        Self {
            semantic: defaults::GENERIC_SEMANTIC_WEIGHT,
            structural: defaults::GENERIC_STRUCTURAL_WEIGHT,
            contextual: defaults::GENERIC_CONTEXTUAL_WEIGHT,
            content: defaults::GENERIC_CONTENT_WEIGHT,
        }
    }

    pub fn ai_suggestion() -> Self {
        Self {
            semantic: defaults::AI_SEMANTIC_WEIGHT,
            structural: defaults::AI_STRUCTURAL_WEIGHT,
            contextual: defaults::AI_CONTEXTUAL_WEIGHT,
            content: defaults::AI_CONTENT_WEIGHT,
        }
    }

    pub fn for_profile(profile: WeightProfile) -> Self {
        match profile {
            WeightProfile::Generic => Self::generic(),
            WeightProfile::AiSuggestion => Self::ai_suggestion(),
        }
    }

    pub fn total(&self) -> f64 {
        self.semantic + self.structural + self.contextual + self.content
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self::generic()
    }
}

/// The four component scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarityComponents {
    pub semantic: f64,
    pub structural: f64,
    pub contextual: f64,
    pub content: f64,
}

impl SimilarityComponents {
    pub fn as_array(&self) -> [f64; 4] {
        [self.semantic, self.structural, self.contextual, self.content]
    }

    /// Weighted sum, normalised by the weight total.
    pub fn weighted(&self, weights: &SimilarityWeights) -> f64 {
        let total = weights.total();
        if total <= 0.0 {
            return 0.0;
        }
        let sum = self.semantic * weights.semantic
            + self.structural * weights.structural
            + self.contextual * weights.contextual
            + self.content * weights.content;
        (sum / total).clamp(0.0, 1.0)
    }
}

/// Pairwise similarity between two cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarityScore {
    pub overall_score: f64,
    pub components: SimilarityComponents,
    pub weights: SimilarityWeights,
    /// Confidence in the relation itself, not in any label.
    pub confidence: f64,
    pub explanation: String,
}
