use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so running without a `orthometry.toml` is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

/// Contains parameters for rendering and storing reports.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// The heading of generated HTML documents.
    pub title: String,
    /// Decimal places for reported values (0 to 6).
    pub decimals: usize,
    /// Where reports go when no explicit output path is given.
    pub output_dir: PathBuf,
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is not set (e.g. "info", "analytics=debug").
    pub level: String,
    /// Directory for daily-rolling log files. Empty disables file logging.
    pub directory: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "Orthodontic Analysis Report".to_string(),
            decimals: 2,
            output_dir: PathBuf::from("reports"),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: PathBuf::new(),
        }
    }
}

impl LoggingSettings {
    pub fn file_logging_enabled(&self) -> bool {
        !self.directory.as_os_str().is_empty()
    }
}
