//! Configuration for the `longhand` binary and REPL

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::parser::Width;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "LONGHAND_CONFIG";

/// Config file picked up from the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "longhand.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entry point used for parsing
    pub width: Width,
    /// Output format of the `parse` and `check` commands
    pub format: OutputFormat,
    /// Colour in error reports
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Width::default(),
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` wins, then `$LONGHAND_CONFIG`; both must exist.
    /// Otherwise `./longhand.toml` is read if present, else defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::NotFound { path }),
            Some(path) => Self::from_file(&path),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::from_file(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {:?}", path);
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
