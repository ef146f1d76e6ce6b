//! Configuration file
//!
//! Loaded once at startup from `config.toml`. Every section and key is
//! optional; a missing file yields the defaults.
//!
//! ```toml
//! [log]
//! revset = "trunk()..@"
//! limit = 200
//! graph = true
//! reversed = false
//!
//! [git]
//! remote = "origin"
//!
//! [ui]
//! confirm_destructive = true
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::LogSettings;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "JJPANE_CONFIG";

const APP_DIR: &str = "jjpane";
const FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// jjpane configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial log pane settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(default = "default_true")]
    pub graph: bool,

    #[serde(default)]
    pub reversed: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            revset: None,
            limit: None,
            graph: true,
            reversed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Remote for push and fetch; skips remote selection when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Ask before abandon, op restore, bookmark delete and push
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_destructive: true,
        }
    }
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from a TOML file, or the defaults if it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from `explicit` (must exist) or the first standard location.
    ///
    /// # Errors
    /// Returns error if an explicit file is missing, or the chosen file is invalid.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load(path);
        }
        match default_path(|key| std::env::var(key).ok(), |path| path.is_file()) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Initial log settings
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            revset: self.log.revset.clone().filter(|r| !r.trim().is_empty()),
            limit: self.log.limit.filter(|&n| n > 0),
            graph: self.log.graph,
            reversed: self.log.reversed,
        }
    }
}

/// Config file location from the environment
///
/// `$JJPANE_CONFIG` is taken as given. Otherwise the first existing file of
/// `$XDG_CONFIG_HOME/jjpane/config.toml` and `$HOME/.config/jjpane/config.toml`.
fn default_path(
    env: impl Fn(&str) -> Option<String>,
    exists: impl Fn(&Path) -> bool,
) -> Option<PathBuf> {
    let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = non_empty(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    let xdg = non_empty("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = non_empty("HOME").map(|home| PathBuf::from(home).join(".config"));
    [xdg, home]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .find(|path| exists(path))
}
