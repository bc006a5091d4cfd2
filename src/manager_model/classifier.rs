use serde::Deserialize;
use crate::manager_model::errors::PredictorError;
use crate::models::feature_vector::FeatureVector;
use crate::models::prediction::PredictionResult;

/// Marks a leaf in the children arrays of a tree
const LEAF: i64 = -1;

/// A trained binary classifier, class 0 is no rain and class 1 is rain
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Classifier {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl Classifier {
    /// Checks that the classifier holds what it needs to run inference
    ///
    pub fn validate(&self) -> Result<(), PredictorError> {
        match self {
            Classifier::RandomForest(forest) => forest.validate(),
            Classifier::LogisticRegression(lr) => lr.validate(),
        }
    }

    /// Runs inference on one row
    ///
    /// # Arguments
    ///
    /// * 'vector' - the feature vector in training column order
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, PredictorError> {
        let [no_rain, rain] = match self {
            Classifier::RandomForest(forest) => forest.predict_proba(vector.as_slice())?,
            Classifier::LogisticRegression(lr) => lr.predict_proba(vector.as_slice())?,
        };

        if !no_rain.is_finite() || !rain.is_finite() {
            return Err(PredictorError::InferenceError(
                format!("classifier produced non-finite probabilities [{}, {}]", no_rain, rain)));
        }

        Ok(PredictionResult::from_probabilities(no_rain, rain))
    }

    /// Short description for logging
    pub fn describe(&self) -> String {
        match self {
            Classifier::RandomForest(forest) =>
                format!("random forest with {} trees", forest.trees.len()),
            Classifier::LogisticRegression(lr) =>
                format!("logistic regression with {} coefficients", lr.coefficients.len()),
        }
    }
}

/// An ensemble of decision trees, probabilities are averaged over the trees
#[derive(Deserialize, Debug, Clone)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    fn validate(&self) -> Result<(), PredictorError> {
        if self.trees.is_empty() {
            return Err(PredictorError::ArtifactInvalid("random forest has no trees".to_string()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|e| PredictorError::ArtifactInvalid(format!("tree {}: {}", i, e)))?;
        }
        Ok(())
    }

    fn predict_proba(&self, x: &[f64]) -> Result<[f64; 2], PredictorError> {
        if x.len() != self.n_features {
            return Err(PredictorError::InferenceError(
                format!("X has {} features, but the random forest is expecting {} features as input",
                        x.len(), self.n_features)));
        }

        let mut sum = [0.0, 0.0];
        for (i, tree) in self.trees.iter().enumerate() {
            let [no_rain, rain] = tree.leaf_distribution(x)
                .map_err(|e| PredictorError::InferenceError(format!("tree {}: {}", i, e)))?;
            sum[0] += no_rain;
            sum[1] += rain;
        }

        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }
}

/// A fitted decision tree as a flattened node table.
///
/// Node 0 is the root. A node is a leaf when its left child is -1, otherwise a sample goes to
/// the left child when its value for `feature` is less than or equal to `threshold`.
/// `value` holds the class weights per node as [no rain, rain].
#[derive(Deserialize, Debug, Clone)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<[f64; 2]>,
}

impl DecisionTree {
    fn validate(&self) -> Result<(), String> {
        let n = self.children_left.len();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != n || self.feature.len() != n
            || self.threshold.len() != n || self.value.len() != n {
            return Err("node arrays differ in length".to_string());
        }
        Ok(())
    }

    /// Walks the tree and returns the normalized class weights of the reached leaf
    ///
    /// # Arguments
    ///
    /// * 'x' - the row to classify
    fn leaf_distribution(&self, x: &[f64]) -> Result<[f64; 2], String> {
        let n_nodes = self.children_left.len();
        let mut node: usize = 0;

        // A well-formed tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..n_nodes {
            if self.children_left[node] == LEAF {
                let [no_rain, rain] = self.value[node];
                let total = no_rain + rain;
                if total.is_nan() || total <= 0.0 {
                    return Err(format!("leaf {} has no class weight", node));
                }
                return Ok([no_rain / total, rain / total]);
            }

            let feature = usize::try_from(self.feature[node])
                .ok()
                .filter(|f| *f < x.len())
                .ok_or_else(|| format!("node {} splits on unknown feature {}", node, self.feature[node]))?;

            let next = if x[feature] <= self.threshold[node] {
                self.children_left[node]
            } else {
                self.children_right[node]
            };

            node = usize::try_from(next)
                .ok()
                .filter(|n| *n < n_nodes)
                .ok_or_else(|| format!("node {} points to missing child {}", node, next))?;
        }

        Err("tree walk did not reach a leaf".to_string())
    }
}

/// Logistic regression over the raw features, P(rain) = sigmoid(w·x + b)
#[derive(Deserialize, Debug, Clone)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    fn validate(&self) -> Result<(), PredictorError> {
        if self.coefficients.is_empty() {
            return Err(PredictorError::ArtifactInvalid("logistic regression has no coefficients".to_string()));
        }
        Ok(())
    }

    fn predict_proba(&self, x: &[f64]) -> Result<[f64; 2], PredictorError> {
        if x.len() != self.coefficients.len() {
            return Err(PredictorError::InferenceError(
                format!("X has {} features, but the logistic regression is expecting {} features as input",
                        x.len(), self.coefficients.len())));
        }

        let z = self.coefficients.iter()
            .zip(x)
            .map(|(w, v)| w * v)
            .sum::<f64>() + self.intercept;

        if !z.is_finite() {
            return Err(PredictorError::InferenceError(format!("decision function is {}", z)));
        }

        let rain = 1.0 / (1.0 + (-z).exp());
        Ok([1.0 - rain, rain])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::prediction::RainLabel;

    /// Two stumps, one on humidity and one on pressure
    pub(crate) const FOREST_JSON: &str = r#"{
        "type": "random_forest",
        "n_features": 7,
        "trees": [
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [2, -2, -2],
                "threshold": [80.0, -2.0, -2.0],
                "value": [[11.0, 9.0], [9.0, 1.0], [2.0, 8.0]]
            },
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [0, -2, -2],
                "threshold": [1005.0, -2.0, -2.0],
                "value": [[7.0, 4.0], [1.0, 4.0], [6.0, 0.0]]
            }
        ]
    }"#;

    fn forest() -> Classifier {
        serde_json::from_str(FOREST_JSON).unwrap()
    }

    fn row(pressure: f64, humidity: f64) -> FeatureVector {
        FeatureVector::new([pressure, 12.0, humidity, 4.0, 7.6, 180.0, 20.0])
    }

    #[test]
    fn forest_predicts_rain() {
        let result = forest().predict(&row(995.0, 95.0)).unwrap();
        assert_eq!(result.label, RainLabel::Rain);
        let p = result.probabilities.unwrap();
        assert!((p.rain - 0.8).abs() < 1e-9);
        assert!((p.no_rain - 0.2).abs() < 1e-9);
    }

    #[test]
    fn forest_predicts_dry() {
        let result = forest().predict(&row(1025.0, 40.0)).unwrap();
        assert_eq!(result.label, RainLabel::NoRain);
        assert!((result.probabilities.unwrap().rain - 0.05).abs() < 1e-9);
    }

    #[test]
    fn split_goes_left_on_equal_threshold() {
        // humidity == 80 goes left (0.1 rain), pressure 1025 goes right (0.0 rain)
        let result = forest().predict(&row(1025.0, 80.0)).unwrap();
        assert!((result.probabilities.unwrap().rain - 0.05).abs() < 1e-9);
    }

    #[test]
    fn forest_with_wrong_feature_count_fails_inference() {
        let json = FOREST_JSON.replace("\"n_features\": 7", "\"n_features\": 6");
        let classifier: Classifier = serde_json::from_str(&json).unwrap();
        assert!(matches!(classifier.predict(&row(995.0, 95.0)), Err(PredictorError::InferenceError(_))));
    }

    #[test]
    fn bad_child_index_fails_inference() {
        let json = FOREST_JSON.replacen("\"children_right\": [2, -1, -1]", "\"children_right\": [7, -1, -1]", 1);
        let classifier: Classifier = serde_json::from_str(&json).unwrap();
        assert!(classifier.validate().is_ok());
        match classifier.predict(&row(995.0, 95.0)) {
            Err(PredictorError::InferenceError(msg)) => assert!(msg.contains("missing child 7"), "{}", msg),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_forest_is_invalid() {
        let classifier: Classifier = serde_json::from_str(r#"{"type": "random_forest", "n_features": 7, "trees": []}"#).unwrap();
        assert!(matches!(classifier.validate(), Err(PredictorError::ArtifactInvalid(_))));
    }

    #[test]
    fn ragged_tree_is_invalid() {
        let json = FOREST_JSON.replacen("\"threshold\": [80.0, -2.0, -2.0]", "\"threshold\": [80.0]", 1);
        let classifier: Classifier = serde_json::from_str(&json).unwrap();
        assert!(matches!(classifier.validate(), Err(PredictorError::ArtifactInvalid(_))));
    }

    #[test]
    fn logistic_regression() {
        let classifier: Classifier = serde_json::from_str(r#"{
            "type": "logistic_regression",
            "coefficients": [-0.1, 0.0, 0.05, 0.3, -0.2, 0.0, 0.01],
            "intercept": 95.0
        }"#).unwrap();
        assert!(classifier.validate().is_ok());

        let rainy = FeatureVector::new([995.0, 20.0, 95.0, 8.0, 0.5, 210.0, 55.0]);
        let dry = FeatureVector::new([1025.0, 5.0, 40.0, 1.0, 12.0, 150.0, 10.0]);
        assert!(classifier.predict(&rainy).unwrap().will_rain());
        assert!(!classifier.predict(&dry).unwrap().will_rain());
    }

    #[test]
    fn logistic_regression_without_coefficients_is_invalid() {
        let classifier: Classifier = serde_json::from_str(
            r#"{"type": "logistic_regression", "coefficients": [], "intercept": 0.0}"#).unwrap();
        assert!(matches!(classifier.validate(), Err(PredictorError::ArtifactInvalid(_))));
    }
}
