use serde::{Deserialize, Serialize};

use super::defaults;

/// Label generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelingConfig {
    /// Path to an external dictionary TOML. The bundled dictionary is used when unset.
    pub dictionary_path: Option<String>,
    /// Maximum number of alternative labels per cluster.
    pub max_alternatives: usize,
}

impl Default for LabelingConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            max_alternatives: defaults::DEFAULT_MAX_LABEL_ALTERNATIVES,
        }
    }
}
