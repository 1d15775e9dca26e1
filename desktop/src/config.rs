use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{EditorError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// VSchema JSON file to start editing from. Read once at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_schema: Option<PathBuf>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl AppConfig {
    /// Load configuration from disk, writing the defaults if no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            info!("Config file not found, creating default configuration");
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| EditorError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| EditorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                EditorError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| EditorError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| EditorError::ConfigError(format!("Failed to write config: {}", e)))?;

        debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "vschema", "VSchemaEditor").ok_or_else(|| {
            EditorError::ConfigError("Failed to determine config directory".to_string())
        })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub theme: String,
    pub font_size: u16,
    pub sidebar_width: u32,
    pub show_schema_json: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            font_size: 14,
            sidebar_width: 280,
            show_schema_json: true,
        }
    }
}
