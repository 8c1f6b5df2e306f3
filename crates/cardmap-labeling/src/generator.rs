//! Label generation for a cluster of cards.

use cardmap_core::config::LabelingConfig;
use cardmap_core::errors::{CardmapResult, LabelingError};
use cardmap_core::models::{Card, ClusterLabel, LabelStrategy};

use crate::dictionary::LabelDictionary;
use crate::keywords::{KeywordAnalysis, KeywordExtractor};
use crate::strategies::{self, LabelContext, ERROR_CONFIDENCE};

/// Assigns a label, alternatives, and reasoning to a cluster.
#[derive(Debug, Clone)]
pub struct LabelGenerator {
    dictionary: LabelDictionary,
    extractor: KeywordExtractor,
    max_alternatives: usize,
}

impl LabelGenerator {
    pub fn new(dictionary: LabelDictionary, max_alternatives: usize) -> Self {
        Self {
            dictionary,
            extractor: KeywordExtractor::new(),
            max_alternatives,
        }
    }

    /// Uses the configured dictionary file, or the bundled dictionary when none is set.
    pub fn from_config(config: &LabelingConfig) -> CardmapResult<Self> {
        let dictionary = match &config.dictionary_path {
            Some(path) => LabelDictionary::from_file(path)?,
            None => LabelDictionary::bundled()?,
        };
        Ok(Self::new(dictionary, config.max_alternatives))
    }

    pub fn dictionary(&self) -> &LabelDictionary {
        &self.dictionary
    }

    /// Label a cluster. Never fails: internal errors become the lowest-confidence fallback.
    pub fn generate(&self, cards: &[&Card]) -> ClusterLabel {
        match self.try_generate(cards) {
            Ok(label) => label,
            Err(err) => {
                tracing::warn!(error = %err, members = cards.len(), "label generation failed, using fallback");
                self.error_fallback(&err)
            }
        }
    }

    /// Label a cluster, surfacing internal errors.
    pub fn try_generate(&self, cards: &[&Card]) -> Result<ClusterLabel, LabelingError> {
        if cards.is_empty() {
            return Err(LabelingError::EmptyCluster);
        }
        let keywords = self.keywords(cards);
        let ctx = LabelContext {
            cards,
            keywords: &keywords,
            dictionary: &self.dictionary,
        };
        let mut candidates = strategies::candidates(&ctx).into_iter();
        let Some(best) = candidates.next() else {
            return Err(LabelingError::EmptyCluster);
        };

        let mut alternatives: Vec<String> = Vec::new();
        for candidate in candidates {
            if alternatives.len() >= self.max_alternatives {
                break;
            }
            if candidate.text != best.text && !alternatives.contains(&candidate.text) {
                alternatives.push(candidate.text);
            }
        }

        Ok(ClusterLabel {
            text: best.text,
            alternatives,
            label_confidence: best.confidence,
            reasoning: best.reasoning,
            strategy: best.strategy,
        })
    }

    /// Keyword statistics for a cluster, after boilerplate filtering.
    pub fn keywords(&self, cards: &[&Card]) -> KeywordAnalysis {
        self.extractor.analyze(cards, &self.dictionary)
    }

    fn error_fallback(&self, err: &LabelingError) -> ClusterLabel {
        ClusterLabel {
            text: self.dictionary.fallback.error.clone(),
            alternatives: Vec::new(),
            label_confidence: ERROR_CONFIDENCE,
            reasoning: format!("label generation failed: {err}"),
            strategy: LabelStrategy::ErrorFallback,
        }
    }
}
