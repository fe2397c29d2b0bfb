// crates/tasks-core/src/config.rs - Configuration System
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--file, --format, --verbose), applied by the CLI
// 2. Environment variables (TASKS_FILE, TASKS_LOG)
// 3. Config file (--config, else TASKS_CONFIG, else ./tasks.toml if present)
// 4. Built-in defaults
//
// Every field has a serde default, so a partial config file is filled in
// from the built-in values rather than rejected.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory when nothing else is named
pub const DEFAULT_CONFIG_FILE: &str = "tasks.toml";

/// Environment variable naming a config file
pub const ENV_CONFIG: &str = "TASKS_CONFIG";
/// Environment variable overriding `storage.path`
pub const ENV_FILE: &str = "TASKS_FILE";
/// Environment variable overriding `logging.level`
pub const ENV_LOG: &str = "TASKS_LOG";

const OUTPUT_FORMATS: [&str; 2] = ["human", "json"];
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Where and how notes are stored
    #[serde(default)]
    pub storage: StorageConfig,

    /// Output formatting options
    #[serde(default)]
    pub output: OutputConfig,

    /// Diagnostic logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file, relative paths resolve against the working directory
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,

    /// Pretty-print the JSON array on every rewrite
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "human" or "json"
    #[serde(default = "default_output_format")]
    pub default_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loading and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load complete configuration from all sources
    ///
    /// `explicit` is a config file named on the command line. A named file
    /// (from the flag or `TASKS_CONFIG`) must exist; the implicit
    /// `./tasks.toml` is only read when present.
    pub fn load_config(explicit: Option<&Path>) -> ConfigResult<TasksConfig> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var(ENV_CONFIG).ok().map(PathBuf::from));

        let mut config = match named {
            Some(path) => Self::load_file(&path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.exists() {
                    Self::load_file(implicit)?
                } else {
                    TasksConfig::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config, |key| env::var(key).ok());
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Read and parse one TOML config file
    pub fn load_file(path: &Path) -> ConfigResult<TasksConfig> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading config file");
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse config file content; `origin` only labels errors
    pub fn parse(content: &str, origin: &str) -> ConfigResult<TasksConfig> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: origin.to_string(),
            error: e.to_string(),
        })
    }

    /// Apply environment variable overrides
    ///
    /// - TASKS_FILE -> storage.path
    /// - TASKS_LOG -> logging.level
    pub fn apply_env_overrides<F>(config: &mut TasksConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_FILE).filter(|p| !p.is_empty()) {
            config.storage.path = PathBuf::from(path);
        }

        if let Some(level) = lookup(ENV_LOG).filter(|l| !l.is_empty()) {
            config.logging.level = level;
        }
    }

    /// Validate the final configuration for consistency and correctness
    pub fn validate_config(config: &TasksConfig) -> ConfigResult<()> {
        if config.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.path cannot be empty".to_string(),
            ));
        }

        if !OUTPUT_FORMATS.contains(&config.output.default_format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid output format '{}'. Must be one of: {}",
                config.output.default_format,
                OUTPUT_FORMATS.join(", ")
            )));
        }

        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level '{}'. Must be one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Generate a default configuration file with comments
    pub fn generate_default_config() -> String {
        r#"# Tasks Configuration File
#
# Lines starting with # are comments and are ignored.

[storage]
# Storage file (overridden by --file and TASKS_FILE)
path = "data.json"

# Pretty-print the JSON file on every write
pretty = false

[output]
# Default output format for `list`: "human" or "json"
default_format = "human"

[logging]
# Diagnostic level written to stderr: error, warn, info, debug, trace
# (overridden by TASKS_LOG; --verbose forces debug)
level = "warn"
"#
        .to_string()
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data.json")
}
fn default_output_format() -> String {
    "human".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            pretty: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_output_format(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
