//! Configuration file loading for the terminal front end.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tapchess_engine::EngineConfig;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Chess symbols such as ♔ and ♟.
    #[default]
    Unicode,
    /// Placement letters: uppercase White, lowercase Black.
    Ascii,
}

/// Front end configuration, read from `tapchess.toml`.
///
/// ```toml
/// glyphs = "ascii"
///
/// [engine]
/// en_passant = "geometric"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub glyphs: GlyphStyle,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl CliConfig {
    /// File looked up in the working directory when no path is given.
    pub const DEFAULT_PATH: &'static str = "tapchess.toml";

    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, `tapchess.toml` in the
    /// working directory is used if present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(Self::DEFAULT_PATH), false),
        };
        if !required && !path.exists() {
            tracing::debug!("no {} found, using defaults", Self::DEFAULT_PATH);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
