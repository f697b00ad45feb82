//! Configuration structures and loading logic.

use crate::api::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Target profile configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Username whose feed is archived.
    #[serde(default)]
    pub username: String,

    /// Identifier of the most recently exported item from a prior run.
    /// Leave unset (or empty) to archive the entire feed.
    #[serde(default)]
    pub last_scraped_id: Option<String>,
}

/// Archiving options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for exported photos.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Feed host. Only worth changing to point at a mirror.
    #[serde(default = "default_base_url")]
    pub feed_base_url: String,

    /// Fixed pause between exports, in milliseconds.
    #[serde(default = "default_export_delay")]
    pub export_delay_ms: u64,

    /// Path to the jhead binary used for EXIF tagging.
    #[serde(default = "default_jhead_path")]
    pub jhead_path: PathBuf,

    /// Whether to log each saved photo.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            feed_base_url: default_base_url(),
            export_delay_ms: default_export_delay(),
            jhead_path: default_jhead_path(),
            show_downloads: true,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_export_delay() -> u64 {
    500
}

fn default_jhead_path() -> PathBuf {
    PathBuf::from("jhead")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the high-water mark, treating an empty string as absent.
    pub fn high_water_mark(&self) -> Option<&str> {
        self.target
            .last_scraped_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}
