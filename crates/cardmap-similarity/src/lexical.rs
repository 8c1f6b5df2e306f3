use cardmap_core::errors::CardmapResult;
use cardmap_core::models::Card;
use cardmap_core::traits::ISemanticSimilarity;

use crate::tokenize::{jaccard, StopWords};

/// Default semantic signal: Jaccard overlap of significant words across title and body.
#[derive(Debug, Clone)]
pub struct LexicalOverlap {
    stop_words: StopWords,
}

impl LexicalOverlap {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }
}

impl Default for LexicalOverlap {
    fn default() -> Self {
        Self::new(StopWords::bundled().clone())
    }
}

impl ISemanticSimilarity for LexicalOverlap {
    fn semantic_similarity(&self, a: &Card, b: &Card) -> CardmapResult<f64> {
        Ok(jaccard(
            &self.stop_words.significant_words(&a.full_text()),
            &self.stop_words.significant_words(&b.full_text()),
        ))
    }

    fn name(&self) -> &str {
        "lexical-overlap"
    }
}
