//! Configuration management for the Planck dashboard.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with `PLANCK_` prefix)
//! 3. `.env` files
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Request and rendering limits
    #[serde(default)]
    pub limits: Limits,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3000")
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Limits applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Widest diagram the renderer will draw, in time columns
    #[serde(default = "default_max_columns")]
    pub max_columns: usize,

    /// Largest register a template may be generated on or a circuit may declare
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,

    /// Largest circuit text accepted, in bytes
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_max_columns() -> usize {
    1000
}

fn default_max_qubits() -> u32 {
    64
}

fn default_max_source_bytes() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_columns: default_max_columns(),
            max_qubits: default_max_qubits(),
            max_source_bytes: default_max_source_bytes(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load `.env` file if it exists
    /// 2. Load from file if provided
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.merge_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables leave the field unchanged. A set numeric variable that
    /// does not parse is an error.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PLANCK_BIND") {
            self.server.bind = v;
        }
        if let Some(v) = lookup("PLANCK_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("PLANCK_LOG_FORMAT") {
            self.logging.format = v;
        }
        if let Some(v) = lookup("PLANCK_MAX_COLUMNS") {
            self.limits.max_columns = parse_var("PLANCK_MAX_COLUMNS", &v)?;
        }
        if let Some(v) = lookup("PLANCK_MAX_QUBITS") {
            self.limits.max_qubits = parse_var("PLANCK_MAX_QUBITS", &v)?;
        }
        if let Some(v) = lookup("PLANCK_MAX_SOURCE_BYTES") {
            self.limits.max_source_bytes = parse_var("PLANCK_MAX_SOURCE_BYTES", &v)?;
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address()?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        if self.limits.max_columns == 0 {
            return Err(ConfigError::ValidationError(
                "max_columns must be greater than 0".to_string(),
            ));
        }
        if self.limits.max_qubits == 0 {
            return Err(ConfigError::ValidationError(
                "max_qubits must be greater than 0".to_string(),
            ));
        }
        if self.limits.max_source_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_source_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the parsed bind address.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|_| {
            ConfigError::ValidationError(format!("Invalid bind address: {}", self.server.bind))
        })
    }

    /// Whether logs should be written as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ParseError(format!("{key}: cannot parse '{value}'")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
