use thiserror::Error;

/// Errors raised while building the `orthometry` configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file or an `ORTHOMETRY__*` override could not be read or deserialized.
    #[error("Failed to load orthometry configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// The values parsed but are outside what the reporter accepts.
    #[error("Invalid orthometry configuration: {0}")]
    ValidationError(String),
}
