//! # cardmap-labeling
//!
//! Human-readable labels for clusters of cards. Keyword statistics with a z-score/IQR
//! boilerplate filter feed an ordered strategy chain backed by a swappable dictionary.

pub mod dictionary;
pub mod generator;
pub mod keywords;
pub mod outliers;
mod strategies;

pub use dictionary::{FallbackLabels, LabelDictionary};
pub use generator::LabelGenerator;
pub use keywords::{KeywordAnalysis, KeywordExtractor, KeywordStat};
