//! Configuration file handling for bitmap-message.
//!
//! Loads configuration from `<config dir>/bitmap-message/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{Filter, DEFAULT_CORRECTION_FACTOR, DEFAULT_MAX_WIDTH};

/// Configuration file structure for bitmap-message.
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub raster: RasterConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RasterConfig {
    /// Intensity cutoff (0-255). Prompted for when unset.
    #[serde(default)]
    pub threshold: Option<i64>,
    #[serde(default = "default_max_width")]
    pub max_width: i64,
    #[serde(default = "default_correction_factor")]
    pub correction_factor: f64,
    #[serde(default)]
    pub filter: Filter,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            max_width: default_max_width(),
            correction_factor: default_correction_factor(),
            filter: Filter::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ComposeConfig {
    /// Message used to fill the light cells. Prompted for when unset.
    #[serde(default)]
    pub message: Option<String>,
}

fn default_max_width() -> i64 {
    DEFAULT_MAX_WIDTH as i64
}

fn default_correction_factor() -> f64 {
    DEFAULT_CORRECTION_FACTOR
}

/// Commented template written by `config init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# bitmap-message configuration

[raster]
# Pixels darker than this (0-255) are left blank; prompted for when unset
# threshold = 128
# Images wider than this are shrunk (never enlarged)
max_width = 1000
# Height scale for tall monospace glyphs
correction_factor = 0.55
# Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3
filter = "lanczos3"

[compose]
# Text repeated over the light pixels; prompted for when unset
# message = "hello world "
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("bitmap-message").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/bitmap-message/config.toml")
        })
}
