//! Document export settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Flavors accepted by `export.flavor`.
pub const FLAVORS: [&str; 2] = ["v2", "v3"];

fn default_flavor() -> String {
    "v2".to_string()
}

fn default_title() -> String {
    "RuntimeComponent".to_string()
}

fn default_version() -> String {
    "v1beta1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// OpenAPI layout of exported documents: `v2` or `v3`.
    #[serde(default = "default_flavor")]
    pub flavor: String,

    /// `info.title` of exported documents.
    #[serde(default = "default_title")]
    pub title: String,

    /// `info.version` of exported documents.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            flavor: default_flavor(),
            title: default_title(),
            version: default_version(),
        }
    }
}

impl ExportConfig {
    /// Reject values the exporter cannot honour.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown flavor or an empty title.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !FLAVORS.contains(&self.flavor.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "export.flavor".to_string(),
                reason: format!("'{}' is not one of {}", self.flavor, FLAVORS.join(", ")),
            });
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.title".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
