//! Game settings
//!
//! Loaded from a TOML file; every field has a default so a partial or missing
//! file is fine. Command-line flags override file values.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_word_length")]
    pub word_length: usize,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Word list file; the embedded list is used when unset. Relative paths
    /// in a config file resolve against that file's directory.
    #[serde(default)]
    pub word_list: Option<PathBuf>,
}

fn default_word_length() -> usize {
    5
}
fn default_max_attempts() -> usize {
    6
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: default_word_length(),
            max_attempts: default_max_attempts(),
            word_list: None,
        }
    }
}

impl GameConfig {
    /// Default config file location, `<config dir>/wordle_game/config.toml`
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordle_game")
            .join("config.toml")
    }

    /// Load settings
    ///
    /// With an explicit path the file must exist. Without one the default
    /// location is tried and a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Io` if the file cannot be read,
    /// `ConfigurationError::Parse` if it is not valid TOML, and
    /// `ConfigurationError::InvalidSetting` if a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigurationError::Io { path, source }),
        };

        let mut config: Self =
            toml::from_str(&content).map_err(|source| ConfigurationError::Parse {
                path: path.clone(),
                source,
            })?;
        config.validate()?;

        // A relative word list is relative to the config file, not the cwd
        if let (Some(list), Some(dir)) = (
            config.word_list.as_mut().filter(|p| p.is_relative()),
            path.parent(),
        ) {
            *list = dir.join(&*list);
        }

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check that every setting can start a game
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSetting` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.word_length == 0 {
            return Err(ConfigurationError::InvalidSetting {
                setting: "word_length",
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigurationError::InvalidSetting {
                setting: "max_attempts",
            });
        }
        Ok(())
    }
}
