pub mod algorithm;
pub mod card;
pub mod cluster;
pub mod matrix;
pub mod network;
pub mod partition;
pub mod quality;
pub mod result;
pub mod similarity;

pub use algorithm::ClusteringAlgorithm;
pub use card::Card;
pub use cluster::{Centroid, ClusterLabel, LabelStrategy, SmartCluster};
pub use matrix::{DistanceMatrix, SimilarityMatrix};
pub use network::{NetworkEdge, NetworkNode};
pub use partition::{Partition, PartitionCluster};
pub use quality::ClusterQualityMetrics;
pub use result::{ClusteringParameters, ClusteringResult, ProcessingMetrics};
pub use similarity::{SimilarityComponents, SimilarityScore, SimilarityWeights};
