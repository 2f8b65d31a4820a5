//! # Configuration Management Module
//!
//! Application settings for the `gearconf` tools, read from a TOML file.
//!
//! ## Configuration Structure
//!
//! - [`GearSection`] - where the gear vocabulary file lives and which key to edit
//! - [`EditorConfig`] - layout and keys of the interactive editor
//! - [`StorageConfig`] - per-item attribute database
//! - [`LoggingConfig`] - log level and optional log file
//!
//! Every section has defaults, so a partial file (or a missing section) loads.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gearconf::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Gear file: {}", config.gear.config_file);
//!
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [gear]
//! config_file = "misc/gear-config.json"
//! config_key = "main"
//!
//! [editor]
//! line_width = 78
//! quit_key = "Q"
//! preview_items = 5
//!
//! [storage]
//! item_db = "data/gear-items"
//!
//! [logging]
//! level = "info"
//! file = "gearconf.log"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::gear::store::DEFAULT_CONFIG_KEY;
use crate::olc::engine::DEFAULT_QUIT_KEY;
use crate::olc::gear_menus::{DEFAULT_LINE_WIDTH, DEFAULT_PREVIEW_ITEMS};
use crate::validation::validate_config_key;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gear: GearSection,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearSection {
    /// Persisted gear vocabulary file (JSON).
    #[serde(default = "default_gear_file")]
    pub config_file: String,
    /// Configuration the editor and `check` operate on.
    #[serde(default = "default_config_key")]
    pub config_key: String,
}

fn default_gear_file() -> String {
    "misc/gear-config.json".to_string()
}

fn default_config_key() -> String {
    DEFAULT_CONFIG_KEY.to_string()
}

impl Default for GearSection {
    fn default() -> Self {
        Self {
            config_file: default_gear_file(),
            config_key: default_config_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_line_width")]
    pub line_width: usize,
    /// Case-sensitive.
    #[serde(default = "default_quit_key")]
    pub quit_key: String,
    /// Entries previewed per category in the namespace menus.
    #[serde(default = "default_preview_items")]
    pub preview_items: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_quit_key() -> String {
    DEFAULT_QUIT_KEY.to_string()
}

fn default_preview_items() -> usize {
    DEFAULT_PREVIEW_ITEMS
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            quit_key: default_quit_key(),
            preview_items: default_preview_items(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_item_db")]
    pub item_db: String,
}

fn default_item_db() -> String {
    "data/gear-items".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            item_db: default_item_db(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: Some("gearconf.log".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_config_key(&self.gear.config_key)
            .map_err(|e| anyhow!("Invalid gear.config_key '{}': {}", self.gear.config_key, e))?;
        if self.editor.quit_key.trim().is_empty() {
            return Err(anyhow!("editor.quit_key must not be empty"));
        }
        if self.editor.quit_key.trim() != self.editor.quit_key {
            return Err(anyhow!(
                "editor.quit_key '{}' must not have surrounding whitespace",
                self.editor.quit_key
            ));
        }
        if self.editor.line_width < 10 {
            return Err(anyhow!(
                "editor.line_width must be at least 10 (got {})",
                self.editor.line_width
            ));
        }
        Ok(())
    }
}
