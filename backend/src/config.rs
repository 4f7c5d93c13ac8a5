//! Configuration management for the Hawaii Climate API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CLIMATE_ prefix

use climate_shared::{DEFAULT_TOBS_STATION, DEFAULT_WINDOW_DAYS};
use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Climate query configuration
    pub climate: ClimateConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Seconds to wait for a free connection before giving up
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClimateConfig {
    /// Station served by the temperature observation endpoint
    pub tobs_station: String,

    /// Length of the trailing window ending at the latest measurement
    pub window_days: i64,

    /// Reject `start`/`end` values that are not `YYYY-MM-DD` dates
    pub strict_dates: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CLIMATE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.url", "sqlite://Resources/hawaii.sqlite")?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("climate.tobs_station", DEFAULT_TOBS_STATION)?
            .set_default("climate.window_days", DEFAULT_WINDOW_DAYS)?
            .set_default("climate.strict_dates", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CLIMATE_ prefix)
            .add_source(
                Environment::with_prefix("CLIMATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Configuration pointing at the given database, everything else default
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: url.into(),
                ..DatabaseConfig::default()
            },
            climate: ClimateConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://Resources/hawaii.sqlite".to_string(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 30,
        }
    }
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            tobs_station: DEFAULT_TOBS_STATION.to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
            strict_dates: false,
        }
    }
}
