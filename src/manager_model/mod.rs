pub mod errors;
pub mod classifier;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::info;
use serde_json::Value;
use crate::manager_model::classifier::Classifier;
use crate::manager_model::errors::PredictorError;
use crate::models::feature_vector::{FeatureVector, FEATURE_ORDER};
use crate::models::prediction::PredictionResult;

/// Key under which a bundle artifact holds its classifier
const BUNDLE_MODEL_KEY: &str = "model";

/// Key under which a bundle artifact may list the columns it was trained on
const BUNDLE_FEATURES_KEY: &str = "feature_names";

/// The shapes an artifact may come in, a bare classifier or a bundle holding one
pub enum Artifact {
    Bare(Classifier),
    Bundle {
        model: Classifier,
        feature_names: Option<Vec<String>>,
    },
}

impl Artifact {
    /// Parses an artifact document.
    /// Any JSON object with a "model" key is treated as a bundle, everything else must be a
    /// classifier in itself.
    ///
    /// # Arguments
    ///
    /// * 'json' - the artifact document
    pub fn from_json(json: &str) -> Result<Artifact, PredictorError> {
        let mut document: Value = serde_json::from_str(json)?;

        let model = document.as_object_mut().and_then(|m| m.remove(BUNDLE_MODEL_KEY));
        match model {
            Some(Value::Null) => Err(PredictorError::ArtifactInvalid("bundle holds no model".to_string())),
            Some(model) => {
                let feature_names = match document.get(BUNDLE_FEATURES_KEY) {
                    Some(names) => Some(serde_json::from_value::<Vec<String>>(names.clone())?),
                    None => None,
                };
                Ok(Artifact::Bundle { model: serde_json::from_value(model)?, feature_names })
            },
            None => Ok(Artifact::Bare(serde_json::from_value(document)?)),
        }
    }

    /// Resolves the artifact into a classifier that is ready for inference.
    ///
    /// If the bundle lists the columns it was trained on they must match the feature vector
    /// order exactly. Artifacts without column names are taken on trust.
    pub fn into_classifier(self) -> Result<Classifier, PredictorError> {
        let (classifier, feature_names) = match self {
            Artifact::Bare(classifier) => (classifier, None),
            Artifact::Bundle { model, feature_names } => (model, feature_names),
        };

        if let Some(names) = feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_ORDER.iter().copied()) {
                return Err(PredictorError::ArtifactInvalid(
                    format!("feature order mismatch, model was trained on [{}] but input is [{}]",
                            names.join(", "), FEATURE_ORDER.join(", "))));
            }
        }

        classifier.validate()?;
        Ok(classifier)
    }
}

/// Loads a classifier from an artifact file
///
/// # Arguments
///
/// * 'path' - path to the artifact file
pub fn load_classifier(path: &Path) -> Result<Classifier, PredictorError> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PredictorError::ArtifactNotFound(path.display().to_string()),
        _ => PredictorError::ArtifactInvalid(format!("{}: {}", path.display(), e)),
    })?;

    let classifier = Artifact::from_json(&json)?.into_classifier()?;
    info!("loaded {} from {}", classifier.describe(), path.display());

    Ok(classifier)
}

/// Struct for loading the classifier artifact and running predictions with it
///
/// The artifact is loaded on first use and kept for the rest of the process. A failed load is
/// not remembered, the next call tries again.
pub struct Predictor {
    model_file: PathBuf,
    classifier: Option<Classifier>,
}

impl Predictor {
    /// Returns a Predictor for the given artifact file, nothing is read until first use
    ///
    /// # Arguments
    ///
    /// * 'model_file' - path to the classifier artifact
    pub fn new<P: AsRef<Path>>(model_file: P) -> Predictor {
        Self { model_file: model_file.as_ref().to_path_buf(), classifier: None }
    }

    /// Predicts whether it will rain tomorrow
    ///
    /// # Arguments
    ///
    /// * 'vector' - feature vector built from the current input state
    pub fn predict(&mut self, vector: &FeatureVector) -> Result<PredictionResult, PredictorError> {
        if let Some(classifier) = &self.classifier {
            return classifier.predict(vector);
        }

        let classifier = load_classifier(&self.model_file)?;
        let result = classifier.predict(vector);
        self.classifier = Some(classifier);

        result
    }
}
