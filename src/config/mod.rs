//! Application configuration module
//!
//! Settings come from the environment (and an optional `.env` file) through
//! the `config` and `dotenvy` crates. Nothing is required: with no variables
//! set the driver runs the built-in garden catalogs with pretty logs.
//!
//! # Example
//!
//! ```no_run
//! use garden_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let catalogs = config.catalog.source().load().expect("Catalogs failed to load");
//! ```

mod catalog;
mod error;
mod logging;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration running the built-in garden catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog source selection
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `GARDEN_SHERPA__*` variables, after merging a `.env` file when
    /// one is present. Double underscores nest: `GARDEN_SHERPA__CATALOG__PATH`
    /// sets `catalog.path` and `GARDEN_SHERPA__LOGGING__FORMAT` sets
    /// `logging.format`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` when a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GARDEN_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter is empty or malformed, or
    /// if a configured catalog file does not exist.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("GARDEN_SHERPA__CATALOG__PATH");
        env::remove_var("GARDEN_SHERPA__LOGGING__LEVEL");
        env::remove_var("GARDEN_SHERPA__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_logging_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GARDEN_SHERPA__LOGGING__LEVEL", "debug");
        env::set_var("GARDEN_SHERPA__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_catalog_file_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("garden.yaml");
        env::set_var("GARDEN_SHERPA__CATALOG__PATH", &missing);
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some(missing.as_path()));
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogNotFound(_))
        ));
    }
}
