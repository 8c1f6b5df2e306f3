use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::errors::{CardmapError, CardmapResult};
use crate::models::ClusteringAlgorithm;

/// Toggle and weight for one clustering-time similarity signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct SignalConfig {
    pub enabled: bool,
    pub weight: f64,
}

impl SignalConfig {
    pub fn new(enabled: bool, weight: f64) -> Self {
        Self { enabled, weight }
    }

    /// Whether the signal contributes to pair similarity at all.
    pub fn is_active(&self) -> bool {
        self.enabled && self.weight > 0.0
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            weight: 0.0,
        }
    }
}

/// Per-signal toggles and weights used to build the clustering distance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ClusteringSignals {
    /// Card-level similarity from the similarity engine.
    pub semantic: SignalConfig,
    /// Jaccard overlap of node tags.
    pub tags: SignalConfig,
    /// Strength of relationship-graph edges.
    pub edges: SignalConfig,
}

impl ClusteringSignals {
    /// Only the tag signal, with weight 1.
    pub fn tags_only() -> Self {
        Self {
            semantic: SignalConfig::new(false, 0.0),
            tags: SignalConfig::new(true, 1.0),
            edges: SignalConfig::new(false, 0.0),
        }
    }

    /// Only the card-level semantic signal, with weight 1.
    pub fn semantic_only() -> Self {
        Self {
            semantic: SignalConfig::new(true, 1.0),
            tags: SignalConfig::new(false, 0.0),
            edges: SignalConfig::new(false, 0.0),
        }
    }
}

impl Default for ClusteringSignals {
    fn default() -> Self {
        Self {
            semantic: SignalConfig::new(true, defaults::DEFAULT_SEMANTIC_SIGNAL_WEIGHT),
            tags: SignalConfig::new(true, defaults::DEFAULT_TAG_SIGNAL_WEIGHT),
            edges: SignalConfig::new(true, defaults::DEFAULT_EDGE_SIGNAL_WEIGHT),
        }
    }
}

/// HDBSCAN-specific options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct HdbscanOptions {
    /// GLOSH score above which a member is reclassified as an outlier.
    pub glosh_threshold: f64,
    /// Allow the root of the cluster tree to be selected as the only cluster.
    pub allow_single_cluster: bool,
}

impl Default for HdbscanOptions {
    fn default() -> Self {
        Self {
            glosh_threshold: defaults::DEFAULT_GLOSH_THRESHOLD,
            allow_single_cluster: defaults::DEFAULT_ALLOW_SINGLE_CLUSTER,
        }
    }
}

/// Per-call clustering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Which clusterer to run.
    pub algorithm: ClusteringAlgorithm,
    /// Smallest cluster kept after post-processing.
    pub min_cluster_size: usize,
    /// Largest cluster kept after post-processing; extra members become outliers.
    pub max_cluster_size: usize,
    /// Pair similarity regarded as "related" (drives DBSCAN eps and agglomerative merging).
    pub similarity_threshold: f64,
    /// Signal toggles and weights.
    pub signals: ClusteringSignals,
    /// HDBSCAN options (ignored by other algorithms).
    pub hdbscan: HdbscanOptions,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            algorithm: ClusteringAlgorithm::default(),
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            max_cluster_size: defaults::DEFAULT_MAX_CLUSTER_SIZE,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            signals: ClusteringSignals::default(),
            hdbscan: HdbscanOptions::default(),
        }
    }
}

impl ClusteringConfig {
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: ClusteringAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_size_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_cluster_size = min;
        self.max_cluster_size = max;
        self
    }

    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_signals(mut self, signals: ClusteringSignals) -> Self {
        self.signals = signals;
        self
    }

    /// Reject inconsistent settings.
    pub fn validate(&self) -> CardmapResult<()> {
        if self.min_cluster_size == 0 {
            return Err(invalid("min_cluster_size", "must be at least 1"));
        }
        if self.max_cluster_size < self.min_cluster_size {
            return Err(invalid(
                "max_cluster_size",
                &format!(
                    "{} is below min_cluster_size {}",
                    self.max_cluster_size, self.min_cluster_size
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(invalid(
                "similarity_threshold",
                &format!("{} is outside [0, 1]", self.similarity_threshold),
            ));
        }
        if !(0.0..=1.0).contains(&self.hdbscan.glosh_threshold) {
            return Err(invalid(
                "hdbscan.glosh_threshold",
                &format!("{} is outside [0, 1]", self.hdbscan.glosh_threshold),
            ));
        }
        for (name, signal) in [
            ("signals.semantic", &self.signals.semantic),
            ("signals.tags", &self.signals.tags),
            ("signals.edges", &self.signals.edges),
        ] {
            if signal.weight < 0.0 || !signal.weight.is_finite() {
                return Err(invalid(name, "weight must be a non-negative number"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> CardmapError {
    CardmapError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
