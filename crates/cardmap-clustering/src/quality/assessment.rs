//! Pass/fail grading of clustering quality:
//! - average cohesion (≥0.3)
//! - coverage (≥0.5)

use cardmap_core::config::defaults::{MIN_ACCEPTABLE_COHESION, MIN_ACCEPTABLE_COVERAGE};
use cardmap_core::models::ClusterQualityMetrics;
use serde::{Deserialize, Serialize};

/// Quality assessment of a clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub cohesion_ok: bool,
    pub coverage_ok: bool,
    pub overall_pass: bool,
    /// Specific issues found.
    pub issues: Vec<String>,
}

/// Assess clustering metrics against the minimum cohesion and coverage.
pub fn assess_quality(metrics: &ClusterQualityMetrics) -> QualityAssessment {
    let mut issues = Vec::new();

    let cohesion_ok = metrics.avg_cohesion >= MIN_ACCEPTABLE_COHESION;
    if !cohesion_ok {
        issues.push(format!(
            "average cohesion {:.3} below minimum {:.3}",
            metrics.avg_cohesion, MIN_ACCEPTABLE_COHESION
        ));
    }

    let coverage_ok = metrics.coverage_ratio >= MIN_ACCEPTABLE_COVERAGE;
    if !coverage_ok {
        issues.push(format!(
            "coverage {:.3} below minimum {:.3} ({} outliers)",
            metrics.coverage_ratio, MIN_ACCEPTABLE_COVERAGE, metrics.outlier_count
        ));
    }

    if metrics.cluster_count == 0 {
        issues.push("no clusters found".to_string());
    }

    QualityAssessment {
        cohesion_ok,
        coverage_ok,
        overall_pass: cohesion_ok && coverage_ok,
        issues,
    }
}
