//! Configuration management for School Planner
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_MAX_HISTORY_DEPTH, MAX_HISTORY_DEPTH_LIMIT};
use crate::navigation::Tab;
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory and file stem used for config and log locations
pub const APP_DIR_NAME: &str = "school-planner";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab opened right after login
    /// Options: "home", "subjects", "profile"
    pub start_tab: String,
    /// Number of views remembered for back navigation
    pub max_history_depth: usize,
    /// Show the bottom tab bar on top-level views
    pub show_tab_bar: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for event dates
    pub date_format: String,
    /// Time format for clock display
    pub time_format: String,
    /// Pin "today" to a fixed YYYY-MM-DD date instead of the local date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app log buffer
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_tab: "home".to_string(),
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
            show_tab_bar: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DATE_FORMAT.to_string(),
            time_format: "%H:%M".to_string(),
            today: None,
        }
    }
}

impl UiConfig {
    /// Configured start tab, Home when the value is not a tab name
    pub fn start_tab(&self) -> Tab {
        self.start_tab.parse().unwrap_or_default()
    }
}

impl DisplayConfig {
    /// The date treated as today: the pinned date if set and valid, else the local date
    pub fn today_date(&self) -> NaiveDate {
        self.today
            .as_deref()
            .and_then(|raw| datetime::parse_date(raw).ok())
            .unwrap_or_else(datetime::today)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(format!("{}.toml", APP_DIR_NAME));
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.start_tab.parse::<Tab>().is_err() {
            anyhow::bail!(
                "start_tab must be one of home, subjects, profile, got '{}'",
                self.ui.start_tab
            );
        }

        if self.ui.max_history_depth == 0 || self.ui.max_history_depth > MAX_HISTORY_DEPTH_LIMIT {
            anyhow::bail!(
                "max_history_depth must be between 1 and {}, got {}",
                MAX_HISTORY_DEPTH_LIMIT,
                self.ui.max_history_depth
            );
        }

        Self::validate_format("date_format", &self.display.date_format)?;
        Self::validate_format("time_format", &self.display.time_format)?;

        if let Some(today) = &self.display.today {
            if let Err(e) = datetime::parse_date(today) {
                anyhow::bail!("Invalid today '{}': {} (expected YYYY-MM-DD)", today, e);
            }
        }

        Ok(())
    }

    fn validate_format(field: &str, format: &str) -> Result<()> {
        if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid {} '{}'", field, format);
        }
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# School Planner Configuration File\n# Generated on {}\n\n",
            datetime::format_ymd(datetime::today())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
