//! Aggregate quality metrics and pass/fail assessment.

mod assessment;
mod evaluator;

pub use assessment::{assess_quality, QualityAssessment};
pub use evaluator::ClusterQualityEvaluator;
