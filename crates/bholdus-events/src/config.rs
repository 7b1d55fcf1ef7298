use crate::batch::ErrorMode;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Batch decoding options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeConfig {
    #[serde(default)]
    pub error_mode: ErrorMode,
    /// Decode blocks on the rayon pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Ignore events whose pallet/event names are not in the catalogue
    /// instead of treating them as failures.
    #[serde(default = "default_true")]
    pub skip_unknown: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::default(),
            parallel: true,
            skip_unknown: true,
        }
    }
}

impl DecodeConfig {
    /// Load from a `.yaml`/`.yml` or JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
            _ => Ok(serde_json::from_str(&text)?),
        }
    }
}
