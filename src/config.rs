//! Configuration management for the weather summary service
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and provides validation for all configuration settings.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::WeatherError;

/// Prefix of environment variables, e.g. `WEATHER_SUMMARY_SERVER__PORT`
pub const ENV_PREFIX: &str = "WEATHER_SUMMARY";
/// Environment variable naming an alternative config file
pub const CONFIG_PATH_VAR: &str = "WEATHER_SUMMARY_CONFIG";
/// Environment variable historically holding the provider API key
pub const API_KEY_VAR: &str = "OPENWEATHER_APIKEY";

const DEFAULT_CONFIG_FILE: &str = "weather-summary.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Provider API key, sent as the `apikey` query parameter
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the provider, without the `/weather` path
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_base_url(),
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

impl ServerConfig {
    /// Socket address string handed to the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ServiceConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::get_config_path);

        let mut builder = Self::base_builder()?;

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        builder = builder.add_source(Self::environment());

        Self::finish(builder)
    }

    /// `WEATHER_SUMMARY_<SECTION>__<FIELD>` overrides. Values stay strings and
    /// serde converts them per field, so numeric-looking keys are kept verbatim.
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(false)
    }

    /// Load configuration from an in-memory TOML document, ignoring the environment
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let builder = Config::builder().add_source(File::from_str(document, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Get the configuration file path
    #[must_use]
    pub fn get_config_path() -> PathBuf {
        env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Seed the builder with the legacy API key variable, lowest precedence
    fn base_builder() -> Result<ConfigBuilder<DefaultState>> {
        let mut builder = Config::builder();
        if let Ok(api_key) = env::var(API_KEY_VAR) {
            builder = builder
                .set_default("weather.api_key", api_key)
                .with_context(|| format!("Failed to apply {API_KEY_VAR}"))?;
        }
        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: ServiceConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_string_values()?;
        Ok(())
    }

    /// Whether requests will reach the provider without credentials
    #[must_use]
    pub fn is_missing_api_key(&self) -> bool {
        self.weather.api_key.trim().is_empty()
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(WeatherError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert!(config.weather.api_key.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.is_missing_api_key());
    }

    #[test]
    fn test_toml_overrides() {
        let config = ServiceConfig::from_toml_str(
            r#"
            [server]
            port = 9000

            [weather]
            api_key = "abc123"
            base_url = "http://localhost:4000/data/2.5"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.weather.api_key, "abc123");
        assert_eq!(config.weather.base_url, "http://localhost:4000/data/2.5");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert!(!config.is_missing_api_key());
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = ServiceConfig::from_toml_str(
            r#"
            [weather]
            base_url = ""
            "#,
        )
        .unwrap();
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = ServiceConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let result = ServiceConfig::from_toml_str(
            r#"
            [logging]
            format = "xml"
            "#,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_base_url_scheme() {
        let mut config = ServiceConfig::default();
        config.weather.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTP or HTTPS"));
    }

    #[test]
    fn test_environment_overrides_keep_values_verbatim() {
        let vars = config::Map::from([
            (
                "WEATHER_SUMMARY_WEATHER__API_KEY".to_string(),
                "12345678901234567890123456789012".to_string(),
            ),
            (
                "WEATHER_SUMMARY_SERVER__PORT".to_string(),
                "9000".to_string(),
            ),
        ]);
        let builder = Config::builder().add_source(ServiceConfig::environment().source(Some(vars)));

        let config = ServiceConfig::finish(builder).unwrap();

        assert_eq!(config.weather.api_key, "12345678901234567890123456789012");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_invalid_port_type_is_rejected() {
        let result = ServiceConfig::from_toml_str(
            r#"
            [server]
            port = "eighty"
            "#,
        );
        assert!(result.is_err());
    }
}
