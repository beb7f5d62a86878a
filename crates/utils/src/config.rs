//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub log_level: String,
    /// Thư mục chứa các file log của singleton demo
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "patterns".to_string(),
            log_level: "info".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_level = match env::var("PATTERNS_LOG_LEVEL") {
            Ok(level) if LOG_LEVELS.contains(&level.to_lowercase().as_str()) => {
                level.to_lowercase()
            }
            Ok(level) => {
                log::warn!(
                    "Unknown log level '{}', falling back to '{}'",
                    level,
                    defaults.log_level
                );
                defaults.log_level
            }
            Err(_) => defaults.log_level,
        };

        Self {
            app_name: env::var("PATTERNS_APP_NAME").unwrap_or(defaults.app_name),
            log_level,
            output_dir: env::var("PATTERNS_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }

    /// Override output directory (ví dụ từ CLI flag)
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Đường dẫn đầy đủ của một file log trong output_dir
    pub fn log_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
