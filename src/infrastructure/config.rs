//! Store configuration: the remembered category filter

use crate::domain::CategoryFilter;
use crate::error::{QuothError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Last selected category filter, persisted across sessions.
    pub filter: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with the default (show-everything) filter
    pub fn new() -> Self {
        Config {
            filter: CategoryFilter::All.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .quoth/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quoth").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuothError::NotQuothStore(path.to_path_buf())
            } else {
                QuothError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuothError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quoth/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let quoth_dir = path.join(".quoth");
        let config_path = quoth_dir.join("config.toml");

        if !quoth_dir.exists() {
            fs::create_dir(&quoth_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuothError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// The remembered selection as a typed filter
    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::parse(&self.filter)
    }

    /// Remember a new selection
    pub fn set_filter(&mut self, filter: &CategoryFilter) {
        self.filter = filter.to_string();
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
