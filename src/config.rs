//! Configuration file handling for playfetch.
//!
//! Loads configuration from `~/.config/playfetch/config.toml` or a custom path.
//! The ramp, palette and artwork width are fixed and not configurable.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ascii::DEFAULT_HTTP_TIMEOUT;

/// Configuration file structure for playfetch.
/// Loaded from ~/.config/playfetch/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct PlayerConfig {
    /// playerctl player name; `None` lets playerctl pick.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct PanelConfig {
    #[serde(default = "default_true")]
    pub swatches: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { swatches: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT.as_secs()
}

/// Contents written by `playfetch config init`.
pub const DEFAULT_CONFIG: &str = r#"# playfetch configuration

[http]
# Artwork download timeout in seconds
timeout_secs = 10

[player]
# Only query this player (see `playerctl -l`)
# name = "spotify"

[panel]
# Show the 16-color swatch rows under the track info
swatches = true
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
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
    /// Refuses to overwrite an existing file.
    pub fn init(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let io_err = |e: std::io::Error| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, DEFAULT_CONFIG).map_err(io_err)
    }
}

/// Effective settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub http_timeout: Duration,
    pub player: Option<String>,
    pub swatches: bool,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            http_timeout: Duration::from_secs(config.http.timeout_secs),
            player: config.player.name.clone(),
            swatches: config.panel.swatches,
        }
    }
}

/// Errors that can occur when loading or creating configuration.
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
    AlreadyExists {
        path: PathBuf,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to access config file '{}': {}",
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
            ConfigError::AlreadyExists { path } => {
                write!(
                    f,
                    "Config file already exists: {}\nUse 'playfetch config show' to view current settings.",
                    path.display()
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
            ConfigError::AlreadyExists { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("playfetch").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/playfetch/config.toml")
        })
}
