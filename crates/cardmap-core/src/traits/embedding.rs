use crate::errors::CardmapResult;

/// External text-embedding provider. The engine never computes embeddings itself.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> CardmapResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
