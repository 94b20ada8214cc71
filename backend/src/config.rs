//! Configuration management for the Mineral LCA Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides such as `LCA__SERVER__PORT`
//!    (prefix and nesting both use `__`)
//!
//! The environment name itself is read from `LCA_ENVIRONMENT` (single `_`)
//! before the sources are built, since it selects the config file.

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::InsightSettings;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Insight generator constants
    pub scoring: ScoringConfig,
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
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    pub co2_confidence: f64,
    pub energy_confidence: f64,
    pub circularity_confidence: f64,
    pub recycling_confidence: f64,
}

impl ScoringConfig {
    pub fn insight_settings(&self) -> InsightSettings {
        InsightSettings {
            co2_confidence: self.co2_confidence,
            energy_confidence: self.energy_confidence,
            circularity_confidence: self.circularity_confidence,
            recycling_confidence: self.recycling_confidence,
        }
    }

    /// Confidence values are probabilities
    fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("scoring.co2_confidence", self.co2_confidence),
            ("scoring.energy_confidence", self.energy_confidence),
            ("scoring.circularity_confidence", self.circularity_confidence),
            ("scoring.recycling_confidence", self.recycling_confidence),
        ];
        for (key, value) in values {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Message(format!(
                    "{} must be between 0 and 1, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

/// `LCA__SECTION__KEY` environment overrides
fn environment_source() -> Environment {
    Environment::with_prefix("LCA")
        .separator("__")
        .try_parsing(true)
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("LCA_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let defaults = InsightSettings::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("scoring.co2_confidence", defaults.co2_confidence)?
            .set_default("scoring.energy_confidence", defaults.energy_confidence)?
            .set_default("scoring.circularity_confidence", defaults.circularity_confidence)?
            .set_default("scoring.recycling_confidence", defaults.recycling_confidence)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables, e.g. LCA__DATABASE__URL
            .add_source(environment_source())
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.scoring.validate()?;
        Ok(config)
    }
}
