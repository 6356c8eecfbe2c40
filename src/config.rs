// Configuration loading and parsing (statline.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{DisplayMode, Metric};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Series colors cycled in roster insertion order when the config does not
/// override them.
pub const DEFAULT_PALETTE: [&str; 5] =
    ["#8884d8", "#82ca9d", "#ffc658", "#ff7f50", "#6a5acd"];

/// Default file name looked up next to the consumer's working directory.
pub const CONFIG_FILE: &str = "statline.toml";

/// Crate configuration. Every field has a default, so the crate works with
/// no config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Path to the roster database. When omitted the store resolves the
    /// platform data directory instead.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Alignment mode used when no mode has been persisted yet.
    pub default_mode: DisplayMode,
    /// Metric selected at startup.
    pub default_metric: Metric,
    /// Series colors, cycled in roster insertion order.
    pub palette: Vec<String>,
}

impl Default for DisplaySection {
    fn default() -> Self {
        DisplaySection {
            default_mode: DisplayMode::Calendar,
            default_metric: Metric::Points,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `path`. A missing file is not an error: defaults
/// apply. Parse and validation failures are surfaced as `ConfigError`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&config)?;
    Ok(config)
}

/// Load configuration from `statline.toml` in the current directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new(CONFIG_FILE))
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.palette.is_empty() {
        return Err(ConfigError::Validation {
            field: "display.palette".into(),
            message: "at least one series color is required".into(),
        });
    }
    for color in &config.display.palette {
        if color.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "display.palette".into(),
                message: "palette entries must be non-empty color strings".into(),
            });
        }
    }
    Ok(())
}
