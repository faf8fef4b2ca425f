//! Application configuration
//!
//! Loaded from a JSON file passed with `--config`. Every field has a default,
//! so a partial file only overrides what it names.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Heading above the assignment list
    pub course_title: String,
    /// Where the save dialog starts; the user's download folder when unset
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial window size (width, height)
    pub initial_size: (f32, f32),
    pub min_size: (f32, f32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            course_title: "Web and App Development".to_string(),
            download_dir: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Assignment Board".to_string(),
            initial_size: (1100.0, 800.0),
            min_size: (700.0, 500.0),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Defaults when no path is given, otherwise the file's contents
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn download_dir(&self) -> Option<PathBuf> {
        self.download_dir.clone().or_else(dirs::download_dir)
    }
}
