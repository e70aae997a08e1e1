// src/config.rs

use crate::layout::TooltipMetrics;
use crate::model::Language;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("could not access {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid settings in {path:?}: {source}")]
  Format {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub language: Language,
  pub show_log_panel: bool,
  pub window_width: i32,
  pub window_height: i32,
  pub tooltip: TooltipMetrics,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      language: Language::default(),
      show_log_panel: true,
      window_width: 1440,
      window_height: 900,
      tooltip: TooltipMetrics::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/pview/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if !path.exists() {
      return (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      );
    }

    match Self::read_from(&path) {
      Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
      Err(e) => (Self::default(), format!("Error loading config: {}", e)),
    }
  }

  /// Saves config to standard OS location, returning where it went.
  pub fn save(&self) -> Result<PathBuf, ConfigError> {
    let path = Self::get_path();
    self.write_to(&path)?;
    Ok(path)
  }

  pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Format {
      path: path.to_path_buf(),
      source,
    })
  }

  pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    };

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, self).map_err(|source| ConfigError::Format {
      path: path.to_path_buf(),
      source,
    })?;
    writer.flush().map_err(io_err)
  }

  fn get_path() -> PathBuf {
    // Must match the application ID in main.rs
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "pview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
