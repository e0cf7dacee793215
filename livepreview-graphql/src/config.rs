//! Reconciler configuration, optionally read from a TOML file.

use livepreview_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Naming conventions of the content graph the records come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Appended to a link-array field's key to form the record key.
    #[serde(default = "default_collection_suffix")]
    pub collection_suffix: String,
    /// Key of the document payload inside a rich-text container.
    #[serde(default = "default_rich_text_key")]
    pub rich_text_key: String,
    /// Whether schema fields missing from the record are reported.
    #[serde(default = "default_report_missing_fields")]
    pub report_missing_fields: bool,
}

fn default_collection_suffix() -> String {
    "Collection".to_string()
}

fn default_rich_text_key() -> String {
    "json".to_string()
}

fn default_report_missing_fields() -> bool {
    true
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            collection_suffix: default_collection_suffix(),
            rich_text_key: default_rich_text_key(),
            report_missing_fields: default_report_missing_fields(),
        }
    }
}

impl ReconcilerConfig {
    /// Parses a configuration from TOML. Absent keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads a configuration file, falling back to defaults when it does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No reconciler config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded reconciler config from {:?}", path);
        Ok(config)
    }

    /// Record key of a link-array field.
    pub fn collection_key(&self, field_key: &str) -> String {
        format!("{field_key}{}", self.collection_suffix)
    }
}
