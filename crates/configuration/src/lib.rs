use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, LoggingSettings, ReportSettings};

/// Highest number of decimal places a report may be rendered with.
pub const MAX_DECIMALS: usize = 6;

/// Prefix for environment overrides, e.g. `ORTHOMETRY__REPORT__DECIMALS=3`.
const ENV_PREFIX: &str = "ORTHOMETRY";

/// Loads the application configuration from an optional `orthometry.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file if present, layers `ORTHOMETRY__*` environment variables
/// on top, deserializes the result into our strongly-typed `Config` struct
/// and validates it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `orthometry.toml`, if any.
        .add_source(config::File::with_name("orthometry").required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(builder)
}

/// Loads the configuration from an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(true))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(builder)
}

fn finish(builder: config::Config) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;
    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.report.decimals > MAX_DECIMALS {
        return Err(ConfigError::ValidationError(format!(
            "report.decimals must be between 0 and {MAX_DECIMALS}, got {}",
            config.report.decimals
        )));
    }
    if config.report.title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.title must not be empty".to_string(),
        ));
    }
    Ok(())
}
