use crate::config::APP_DIR_NAME;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Number of entries kept in memory for the logs dialog
const MAX_LOG_ENTRIES: usize = 1000;

/// Shared logger that can be used across the application
///
/// Every entry lands in an in-memory buffer shown by the logs dialog. When file
/// logging is enabled, entries (and anything else sent through the `log`
/// macros) are also written to a log file by a `fern` dispatch.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_enabled: false,
        }
    }

    /// Build a logger from the `[logging] enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            Self::init_file_logging(&path)?;
            logger.file_enabled = true;
        }
        Ok(logger)
    }

    /// Whether entries are also written to the log file
    pub fn is_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if self.file_enabled {
            log::info!("{}", message);
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for logs"))
            .map(|dir| dir.join(APP_DIR_NAME).join(format!("{}.log", APP_DIR_NAME)))
    }

    fn init_file_logging(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {:<5} {}: {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .chain(file);

        // A global logger can only be installed once per process; a second
        // logger built from config keeps using the first dispatch.
        if dispatch.apply().is_err() {
            log::debug!("Logger: file logging already initialized");
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
