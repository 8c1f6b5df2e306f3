mod cardmap_error;
mod clustering_error;
mod embedding_error;
mod labeling_error;
mod similarity_error;

pub use cardmap_error::{CardmapError, CardmapResult};
pub use clustering_error::ClusteringError;
pub use embedding_error::EmbeddingError;
pub use labeling_error::LabelingError;
pub use similarity_error::SimilarityError;
