//! Server configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`ServerConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Directory holding `combined.log` and `error.log`
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Write JSON log files in addition to stdout
    #[serde(default = "default_true")]
    pub file_logging: bool,

    /// Largest request body buffered for request logging
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Service name reported by the health endpoint and startup log
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_true() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    100 * 1024
}

fn default_service_name() -> String {
    "calculator-microservice".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
            log_dir: default_log_dir(),
            file_logging: true,
            max_body_bytes: default_max_body_bytes(),
            service_name: default_service_name(),
        }
    }
}

/// Where a loaded [`ServerConfig`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this TOML file.
    File(PathBuf),
    /// No file present; built-in defaults.
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "Loaded configuration from {}", path.display()),
            ConfigSource::Defaults => f.write_str("Using default configuration"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Runs before the subscriber is installed, so the caller logs the
    /// returned [`ConfigSource`] instead.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Ok((Self::from_file(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Override host and port, e.g. from command-line flags or `PORT`.
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.file_logging);
        assert_eq!(config.max_body_bytes, 102_400);
        assert_eq!(config.service_name, "calculator-microservice");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("port = 8081\nfile_logging = false\n").unwrap();
        assert_eq!(config.port, 8081);
        assert!(!config.file_logging);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_empty_toml_equals_default() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml_str("port = \"not a port\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"127.0.0.1\"\nlog_dir = \"/tmp/calc-logs\"").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/calc-logs"));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let (config, source) = ServerConfig::load_or_default("/nonexistent/calculator.toml").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(source.to_string(), "Using default configuration");

        let err = ServerConfig::from_file("/nonexistent/calculator.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_existing_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 8081").unwrap();

        let (config, source) = ServerConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
        assert!(source.to_string().starts_with("Loaded configuration from "));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default().with_overrides(Some("127.0.0.1".into()), Some(4000));
        assert_eq!(config.bind_address(), "127.0.0.1:4000");

        let untouched = ServerConfig::default().with_overrides(None, None);
        assert_eq!(untouched.bind_address(), "0.0.0.0:3000");
    }
}
