mod clusterer;
mod embedding;
mod observer;
mod semantic;

pub use clusterer::IClusterer;
pub use embedding::IEmbeddingProvider;
pub use observer::{ClusteringEvent, IClusteringObserver, NoopObserver};
pub use semantic::ISemanticSimilarity;
