//! Configuration file loading.
//!
//! Settings come from `chess.toml` in the working directory unless another
//! path is given on the command line. Every field has a default, so the
//! file itself is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`PlayConfig`].
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unicode chess glyphs instead of FEN letters.
    pub unicode: bool,
    /// File and rank labels around the board.
    pub coordinates: bool,
    /// Draw the board from Black's side.
    pub flip: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode: true,
            coordinates: true,
            flip: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl LogConfig {
    /// Filter directive to use: `flag` when given, else the configured level.
    pub fn level_or(&self, flag: Option<String>) -> String {
        flag.unwrap_or_else(|| self.level.clone())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PlayConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl PlayConfig {
    /// Default configuration file name.
    pub const FILE_NAME: &'static str = "chess.toml";

    /// Loads the configuration from `path`, or from [`Self::FILE_NAME`]
    /// when no path is given.
    ///
    /// A missing default file yields the defaults; a missing explicit
    /// path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(Self::FILE_NAME), false),
        };
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadError { path, source })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
