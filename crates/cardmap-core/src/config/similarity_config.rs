use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{CardmapError, CardmapResult};
use crate::models::SimilarityWeights;

/// Which default component weights the similarity engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WeightProfile {
    /// Cards authored on the board.
    #[default]
    Generic,
    /// Importing externally supplied, AI-ranked suggestions.
    AiSuggestion,
}

/// Similarity engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    pub profile: WeightProfile,
    /// Explicit weights; overrides the profile when set.
    pub weights: Option<SimilarityWeights>,
    /// Added to the bundled stop words before overlap scoring.
    pub extra_stop_words: Vec<String>,
}

impl SimilarityConfig {
    /// The weights the engine should use.
    pub fn effective_weights(&self) -> SimilarityWeights {
        self.weights
            .unwrap_or_else(|| SimilarityWeights::for_profile(self.profile))
    }

    pub fn validate(&self) -> CardmapResult<()> {
        if let Some(w) = &self.weights {
            let all = [w.semantic, w.structural, w.contextual, w.content];
            if all.iter().any(|v| *v < 0.0 || !v.is_finite()) {
                return Err(CardmapError::InvalidConfig {
                    field: "similarity.weights".to_string(),
                    reason: "weights must be non-negative numbers".to_string(),
                });
            }
            if all.iter().sum::<f64>() <= 0.0 {
                return Err(CardmapError::InvalidConfig {
                    field: "similarity.weights".to_string(),
                    reason: "at least one weight must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}
