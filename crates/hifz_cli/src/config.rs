//! Optional TOML configuration for the command line tool.
//!
//! ```toml
//! catalog = "layouts/indopak.json"
//! daily_target_pages = 1.5
//! log_level = "debug"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use hifz_engine::DEFAULT_DAILY_TARGET_PAGES;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

fn default_daily_target() -> f64 {
    DEFAULT_DAILY_TARGET_PAGES
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// JSON catalog to use instead of the bundled layout.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default = "default_daily_target")]
    pub daily_target_pages: f64,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            daily_target_pages: DEFAULT_DAILY_TARGET_PAGES,
            log_level: None,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.daily_target_pages.is_finite() || self.daily_target_pages <= 0.0 {
            return Err(ConfigError::Invalid(
                "daily_target_pages must be a positive number",
            ));
        }
        if let Some(path) = &self.catalog {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("catalog must not be an empty path"));
            }
        }
        if self.log_level.is_some() && self.level_filter().is_none() {
            return Err(ConfigError::Invalid(
                "log_level must be one of off, error, warn, info, debug, trace",
            ));
        }
        Ok(())
    }

    /// Configured log level, `None` when unset or unrecognized.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .as_deref()
            .and_then(|s| LevelFilter::from_str(s.trim()).ok())
    }
}
