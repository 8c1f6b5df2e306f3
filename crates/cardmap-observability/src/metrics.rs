//! Aggregated clustering metrics across runs.

use cardmap_core::models::ClusteringAlgorithm;
use cardmap_core::traits::ClusteringEvent;
use serde::{Deserialize, Serialize};

/// Summary of one completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSample {
    pub algorithm: ClusteringAlgorithm,
    pub clusters: usize,
    pub outliers: usize,
    pub coverage_ratio: f64,
    pub avg_cohesion: f64,
    pub elapsed_ms: f64,
}

/// Counters and per-run samples built from clustering events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusteringMetricsCollector {
    samples: Vec<RunSample>,
    /// Runs that started, including ones that never completed.
    pub runs_started: u64,
    pub label_fallbacks: u64,
    pub glosh_reclassified: u64,
    pub truncated_members: u64,
    pub demoted_clusters: u64,
}

impl ClusteringMetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the counters.
    pub fn record(&mut self, event: &ClusteringEvent) {
        match event {
            ClusteringEvent::RunStarted { .. } => self.runs_started += 1,
            ClusteringEvent::OutliersReclassified { count } => {
                self.glosh_reclassified += *count as u64;
            }
            ClusteringEvent::SizeBoundsApplied {
                truncated_members,
                demoted_clusters,
            } => {
                self.truncated_members += *truncated_members as u64;
                self.demoted_clusters += *demoted_clusters as u64;
            }
            ClusteringEvent::LabelFallback { .. } => self.label_fallbacks += 1,
            ClusteringEvent::RunCompleted {
                algorithm,
                clusters,
                outliers,
                coverage_ratio,
                avg_cohesion,
                elapsed_ms,
            } => self.samples.push(RunSample {
                algorithm: *algorithm,
                clusters: *clusters,
                outliers: *outliers,
                coverage_ratio: *coverage_ratio,
                avg_cohesion: *avg_cohesion,
                elapsed_ms: *elapsed_ms,
            }),
            ClusteringEvent::MatrixBuilt { .. }
            | ClusteringEvent::ParametersDerived { .. }
            | ClusteringEvent::HierarchyBuilt { .. } => {}
        }
    }

    pub fn samples(&self) -> &[RunSample] {
        &self.samples
    }

    /// Completed runs.
    pub fn total_runs(&self) -> u64 {
        self.samples.len() as u64
    }

    pub fn total_clusters(&self) -> usize {
        self.samples.iter().map(|s| s.clusters).sum()
    }

    pub fn total_outliers(&self) -> usize {
        self.samples.iter().map(|s| s.outliers).sum()
    }

    /// Average coverage ratio across completed runs.
    pub fn avg_coverage(&self) -> f64 {
        Self::avg(&self.samples, |s| s.coverage_ratio)
    }

    /// Average cohesion across completed runs.
    pub fn avg_cohesion(&self) -> f64 {
        Self::avg(&self.samples, |s| s.avg_cohesion)
    }

    pub fn avg_elapsed_ms(&self) -> f64 {
        Self::avg(&self.samples, |s| s.elapsed_ms)
    }

    /// Label fallbacks per completed run.
    pub fn label_fallback_rate(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.label_fallbacks as f64 / self.samples.len() as f64
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn avg(samples: &[RunSample], f: fn(&RunSample) -> f64) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = samples.iter().map(f).sum();
        sum / samples.len() as f64
    }
}
