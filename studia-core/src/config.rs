//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/studia/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/studia/` (~/.config/studia/)
//! - Data: `$XDG_DATA_HOME/studia/` (~/.local/share/studia/)
//! - State/Logs: `$XDG_STATE_HOME/studia/` (~/.local/state/studia/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Recommendation tuning
    #[serde(default)]
    pub recommend: RecommendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data file locations
#[derive(Debug, Deserialize, Default)]
pub struct DataConfig {
    /// Directory scanned for importable CSV study logs
    /// (default: `$XDG_DATA_HOME/studia/`)
    pub csv_dir: Option<PathBuf>,
}

/// Tuning for the target-hours recommendation strategy
#[derive(Debug, Deserialize)]
pub struct RecommendConfig {
    /// Minimum qualifying sessions a topic needs before its own average
    /// is used instead of the overall average
    #[serde(default = "default_min_topic_samples")]
    pub min_topic_samples: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_topic_samples: default_min_topic_samples(),
        }
    }
}

fn default_min_topic_samples() -> usize {
    3
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/studia/config.toml` (~/.config/studia/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("studia").join("config.toml")
    }

    /// Returns the data directory path (for SQLite database and CSV files)
    ///
    /// `$XDG_DATA_HOME/studia/` (~/.local/share/studia/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("studia")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/studia/` (~/.local/state/studia/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("studia")
    }

    /// Returns the database file path
    ///
    /// `$XDG_DATA_HOME/studia/study.db` (~/.local/share/studia/study.db)
    pub fn database_path() -> PathBuf {
        Self::data_dir().join("study.db")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/studia/studia.log` (~/.local/state/studia/studia.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("studia.log")
    }

    /// Returns the directory scanned for importable CSV files.
    pub fn csv_dir(&self) -> PathBuf {
        self.data
            .csv_dir
            .clone()
            .unwrap_or_else(Self::data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data.csv_dir.is_none());
        assert_eq!(config.recommend.min_topic_samples, 3);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[data]
csv_dir = "/tmp/study-logs"

[recommend]
min_topic_samples = 5

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(
            config.data.csv_dir.as_deref(),
            Some(std::path::Path::new("/tmp/study-logs"))
        );
        assert_eq!(config.recommend.min_topic_samples, 5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_csv_dir_override() {
        let config = Config {
            data: DataConfig {
                csv_dir: Some(PathBuf::from("/data/logs")),
            },
            ..Default::default()
        };
        assert_eq!(config.csv_dir(), PathBuf::from("/data/logs"));
    }
}
