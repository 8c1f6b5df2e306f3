//! # cardmap-similarity
//!
//! Pairwise card similarity from four signals (semantic, structural, contextual, content),
//! a pluggable semantic provider with a lexical-overlap default, the relationship graph
//! lookup, and the O(n²) similarity/distance matrix builder.

pub mod components;
pub mod distance_model;
pub mod embedding;
pub mod engine;
pub mod graph;
pub mod lexical;
pub mod tokenize;

pub use distance_model::DistanceModel;
pub use embedding::{cosine_similarity, EmbeddingSimilarity};
pub use engine::SimilarityEngine;
pub use graph::RelationshipGraph;
pub use lexical::LexicalOverlap;
pub use tokenize::StopWords;
