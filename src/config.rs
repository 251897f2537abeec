//! Configuration management for the Kisan Dost service
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates the result. The provider credential is read from
//! `API_KEY` (a `.env` file is honored by the binary); without it the
//! service refuses to start.

use crate::KisanError;
use anyhow::{Context, Result};
use chrono_tz::Tz;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable holding the weather provider credential
pub const API_KEY_ENV: &str = "API_KEY";
/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "KISAN_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KisanConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Snapshot file settings
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Local time zone settings
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Provider base URL, without the `/data/2.5` path
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Upper bound on the single forecast request, in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Output file, relative paths resolve against the working directory
    #[serde(default = "default_snapshot_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// IANA time zone used for local dates and times
    #[serde(default = "default_timezone")]
    pub timezone: String,
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
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_timeout() -> u64 {
    10
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("urdu_weather_forecast.json")
}

fn default_timezone() -> String {
    "Asia/Karachi".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
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

impl LocaleConfig {
    /// Parse the configured time zone
    pub fn tz(&self) -> std::result::Result<Tz, KisanError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| KisanError::config(format!("Invalid time zone '{}': {e}", self.timezone)))
    }
}

impl KisanConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let config_path = env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load_from_path(config_path, env::var(API_KEY_ENV).ok())
    }

    /// Load configuration from the given file (or `config.toml` if present)
    /// with `api_key` overriding any configured key.
    pub fn load_from_path(config_path: Option<PathBuf>, api_key: Option<String>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        // KISAN_SERVER__PORT=9000 overrides server.port
        builder = builder.add_source(
            Environment::with_prefix("KISAN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder = builder
            .set_override_option("weather.api_key", api_key)
            .with_context(|| "Failed to apply API key override")?;

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: KisanConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// The provider credential must be present; the service cannot run
    /// without it.
    pub fn validate_api_key(&self) -> Result<()> {
        match self.weather.api_key.as_deref().map(str::trim) {
            None | Some("") => Err(KisanError::config(format!(
                "{API_KEY_ENV} not found. Set it in the environment or in a .env file."
            ))
            .into()),
            Some(_) => Ok(()),
        }
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(
                KisanError::config("Weather API timeout must be between 1 and 300 seconds").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(KisanError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(KisanError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(KisanError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.snapshot.path.as_os_str().is_empty() {
            return Err(KisanError::config("Snapshot path cannot be empty").into());
        }

        self.locale.tz()?;

        Ok(())
    }
}
