use crate::errors::CardmapResult;
use crate::models::Card;

/// Pluggable semantic similarity signal between two cards.
///
/// Errors are propagated to the caller unmodified; there is no fallback.
pub trait ISemanticSimilarity: Send + Sync {
    /// Similarity in [0, 1].
    fn semantic_similarity(&self, a: &Card, b: &Card) -> CardmapResult<f64>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
