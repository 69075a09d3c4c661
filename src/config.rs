//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::{CaseMetric, Scope};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote statistics source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Days of history requested for the chart
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    #[serde(default = "default_source_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://disease.sh/v3/covid-19".to_string()
}

fn default_lookback_days() -> u32 {
    60
}

fn default_source_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("Outbreak/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lookback_days: default_lookback_days(),
            request_timeout_secs: default_source_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8083
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard defaults and display rules
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Scope shown when a request names none
    #[serde(default)]
    pub default_country: Scope,

    /// Metric shown when a request names none
    #[serde(default)]
    pub default_metric: CaseMetric,

    /// Rendered in place of counts the source did not report
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "0".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_country: Scope::Worldwide,
            default_metric: CaseMetric::Cases,
            placeholder: default_placeholder(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("outbreak").join("config.toml")),
            Some(PathBuf::from("/etc/outbreak/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Source overrides
        if let Some(url) = lookup("OUTBREAK_SOURCE_URL") {
            self.source.base_url = url;
        }
        if let Some(days) = lookup("OUTBREAK_LOOKBACK_DAYS") {
            match days.parse() {
                Ok(d) => self.source.lookback_days = d,
                Err(_) => tracing::warn!(value = %days, "Ignoring invalid OUTBREAK_LOOKBACK_DAYS"),
            }
        }

        // API overrides
        if let Some(host) = lookup("OUTBREAK_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("OUTBREAK_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid OUTBREAK_API_PORT"),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("OUTBREAK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OUTBREAK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Outbreak Configuration
#
# Environment variables override these settings:
# - OUTBREAK_SOURCE_URL
# - OUTBREAK_LOOKBACK_DAYS
# - OUTBREAK_API_HOST
# - OUTBREAK_API_PORT
# - OUTBREAK_LOG_LEVEL
# - OUTBREAK_LOG_FORMAT

[source]
# Statistics API base URL
base_url = "https://disease.sh/v3/covid-19"

# Days of history shown on the chart
lookback_days = 60

# Upstream request timeout in seconds
request_timeout_secs = 10

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8083

# Allowed CORS origins (empty = any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[dashboard]
# Scope when a request names none: "worldwide" or a country code
default_country = "worldwide"

# Metric when a request names none: cases, recovered or deaths
default_metric = "cases"

# Shown in place of counts the source did not report
placeholder = "0"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.base_url, "https://disease.sh/v3/covid-19");
        assert_eq!(config.source.lookback_days, 60);
        assert_eq!(config.api.addr(), "0.0.0.0:8083");
        assert_eq!(config.dashboard.default_country, Scope::Worldwide);
        assert_eq!(config.dashboard.placeholder, "0");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.source.base_url, defaults.source.base_url);
        assert_eq!(config.source.lookback_days, defaults.source.lookback_days);
        assert_eq!(config.api.port, defaults.api.port);
        assert_eq!(config.dashboard.default_metric, defaults.dashboard.default_metric);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[source]
lookback_days = 30

[dashboard]
default_country = "BR"
default_metric = "deaths"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.source.lookback_days, 30);
        assert_eq!(config.source.base_url, "https://disease.sh/v3/covid-19");
        assert_eq!(config.dashboard.default_country, Scope::country("BR"));
        assert_eq!(config.dashboard.default_metric, CaseMetric::Deaths);
        assert_eq!(config.api.port, 8083);
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/nonexistent/outbreak.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ndefault_metric = \"active\"").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("OUTBREAK_SOURCE_URL", "http://localhost:3000/v3/covid-19"),
            ("OUTBREAK_LOOKBACK_DAYS", "14"),
            ("OUTBREAK_API_PORT", "not-a-port"),
            ("OUTBREAK_LOG_FORMAT", "json"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.source.base_url, "http://localhost:3000/v3/covid-19");
        assert_eq!(config.source.lookback_days, 14);
        assert_eq!(config.api.port, 8083);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
