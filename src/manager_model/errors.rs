use thiserror::Error;

/// Errors from loading a classifier artifact or running inference on it
///
#[derive(Error, Debug, PartialEq)]
pub enum PredictorError {
    #[error("PredictorError::ArtifactNotFound: {0}")]
    ArtifactNotFound(String),
    #[error("PredictorError::ArtifactInvalid: {0}")]
    ArtifactInvalid(String),
    #[error("PredictorError::InferenceError: {0}")]
    InferenceError(String),
}

impl PredictorError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            PredictorError::ArtifactNotFound(path) =>
                format!("Model file not found. Ensure '{}' is present.", path),
            PredictorError::ArtifactInvalid(e) =>
                format!("Could not load the model from the model file: {}", e),
            PredictorError::InferenceError(e) =>
                format!("An error occurred: {}", e),
        }
    }
}
impl From<serde_json::Error> for PredictorError {
    fn from(e: serde_json::Error) -> Self { PredictorError::ArtifactInvalid(format!("json document error: {}", e)) }
}
