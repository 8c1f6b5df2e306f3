//! Semantic signal backed by an external embedding provider.

use cardmap_core::errors::{CardmapResult, EmbeddingError};
use cardmap_core::models::Card;
use cardmap_core::traits::{IEmbeddingProvider, ISemanticSimilarity};

/// Cosine similarity between two vectors.
/// Returns 0.0 for mismatched, empty, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Adapts an [`IEmbeddingProvider`] into a semantic similarity signal.
/// Negative cosine values count as unrelated.
pub struct EmbeddingSimilarity {
    provider: Box<dyn IEmbeddingProvider>,
}

impl EmbeddingSimilarity {
    pub fn new(provider: Box<dyn IEmbeddingProvider>) -> Self {
        Self { provider }
    }
}

impl ISemanticSimilarity for EmbeddingSimilarity {
    fn semantic_similarity(&self, a: &Card, b: &Card) -> CardmapResult<f64> {
        let ea = self.provider.embed(&a.full_text())?;
        let eb = self.provider.embed(&b.full_text())?;
        if ea.len() != eb.len() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: ea.len(),
                actual: eb.len(),
            }
            .into());
        }
        Ok(cosine_similarity(&ea, &eb).max(0.0))
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_returns_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
