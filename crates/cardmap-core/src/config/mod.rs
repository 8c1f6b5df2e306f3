pub mod clustering_config;
pub mod defaults;
pub mod labeling_config;
pub mod observability_config;
pub mod similarity_config;

pub use clustering_config::{ClusteringConfig, ClusteringSignals, HdbscanOptions, SignalConfig};
pub use labeling_config::LabelingConfig;
pub use observability_config::ObservabilityConfig;
pub use similarity_config::{SimilarityConfig, WeightProfile};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CardmapError, CardmapResult};

/// Top-level engine configuration, aggregating every subsystem section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub clustering: ClusteringConfig,
    pub similarity: SimilarityConfig,
    pub labeling: LabelingConfig,
    pub observability: ObservabilityConfig,
}

impl EngineConfig {
    /// Parse a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml(toml_str: &str) -> CardmapResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| CardmapError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> CardmapResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CardmapError::ConfigError {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }

    /// Validate every section.
    pub fn validate(&self) -> CardmapResult<()> {
        self.clustering.validate()?;
        self.similarity.validate()?;
        Ok(())
    }
}
