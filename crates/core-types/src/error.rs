use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Missing required landmark: '{0}'")]
    MissingRequiredLandmark(String),

    #[error("Invalid analysis kind: '{0}' (expected one of: superior-space, inferior-space, bolton, peck-and-peck, all)")]
    InvalidAnalysisKind(String),

    #[error("Landmark '{0}' is defined more than once")]
    DuplicateLandmark(String),

    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}
