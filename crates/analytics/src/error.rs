use core_types::{AnalysisKind, CoreError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Missing required landmark '{label}' for {kind} analysis")]
    MissingRequiredLandmark { kind: AnalysisKind, label: String },

    #[error("Invalid analysis kind: '{0}'")]
    InvalidAnalysisKind(String),

    #[error("Degenerate measurement: {0} is zero, ratio is undefined")]
    DegenerateMeasurement(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AnalyticsError {
    /// Attaches the requested analysis kind to a landmark lookup failure.
    pub(crate) fn for_kind(kind: AnalysisKind) -> impl Fn(CoreError) -> AnalyticsError {
        move |err| match err {
            CoreError::MissingRequiredLandmark(label) => {
                AnalyticsError::MissingRequiredLandmark { kind, label }
            }
            CoreError::InvalidAnalysisKind(value) => AnalyticsError::InvalidAnalysisKind(value),
            other => AnalyticsError::Core(other),
        }
    }
}
