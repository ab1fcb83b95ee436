use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::options::PaginationOptions;
use crate::template::WrapperTemplates;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pagination: PaginationOptions,
    pub wrapper: WrapperConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// Fixed wrapper template replacing the loop navigation wrapper.
    pub template: Option<String>,
}

impl WrapperConfig {
    /// Wrapper registry for this config.
    pub fn templates(&self) -> WrapperTemplates {
        match &self.template {
            Some(template) => WrapperTemplates::default().with_template(template.clone()),
            None => WrapperTemplates::default(),
        }
    }
}

impl Config {
    /// The config compiled into the crate from `default_config.toml`.
    pub fn compiled_default() -> Self {
        // Validated by build.rs
        Self::parse(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse config from TOML text. Missing keys keep their defaults.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from a TOML file.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file, or return the compiled default if it is
    /// missing or invalid.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file; using defaults");
                Self::compiled_default()
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::compiled_default()
            }
        }
    }
}
