//! # rtc-config
//!
//! Layered configuration loading for `rtc` using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RTC_*` prefix, `__` as separator)
//! 2. Project-level `.rtc/config.toml`
//! 3. User-level `~/.config/rtc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RTC_EXPORT__FLAVOR` -> `export.flavor`,
//! `RTC_VALIDATION__REJECT_UNKNOWN_FIELDS` -> `validation.reject_unknown_fields`.
//!
//! # Usage
//!
//! ```no_run
//! use rtc_config::RtcConfig;
//!
//! let config = RtcConfig::load_with_dotenv().expect("config");
//! println!("exporting OpenAPI {}", config.export.flavor);
//! ```

mod error;
mod export;
mod validation;

pub use error::ConfigError;
pub use export::{ExportConfig, FLAVORS};
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".rtc/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RtcConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl RtcConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if the merged values are rejected.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit config file layered above the standard files.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`], plus `ConfigError::InvalidValue` if `path`
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file '{}' does not exist", path.display()),
            });
        }

        let figment = Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider());
        Self::from_figment(&figment)
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.export.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::base_figment().merge(Self::env_provider())
    }

    /// Defaults, then user-global, then project-local TOML.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("RTC_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rtc").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = RtcConfig::default();
        assert_eq!(config.export.flavor, "v2");
        assert!(!config.validation.reject_unknown_fields);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = RtcConfig::figment();
        let config: RtcConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.export.title, "RuntimeComponent");
    }
}
