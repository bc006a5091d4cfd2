use std::fmt;
use std::fmt::Formatter;
use serde::Serialize;

/// Binary outcome of the classifier, class 1 is rain
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainLabel {
    NoRain,
    Rain,
}

impl fmt::Display for RainLabel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RainLabel::NoRain => write!(f, "no rain"),
            RainLabel::Rain   => write!(f, "rain"),
        }
    }
}

/// Class probabilities as reported by the classifier
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities {
    pub no_rain: f64,
    pub rain: f64,
}

/// Result of one prediction, never persisted
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub label: RainLabel,
    pub probabilities: Option<ClassProbabilities>,
}

impl PredictionResult {
    /// Builds a result from class probabilities, ties go to no rain
    ///
    /// # Arguments
    ///
    /// * 'no_rain' - probability of class 0
    /// * 'rain' - probability of class 1
    pub fn from_probabilities(no_rain: f64, rain: f64) -> PredictionResult {
        let label = if rain > no_rain { RainLabel::Rain } else { RainLabel::NoRain };
        PredictionResult { label, probabilities: Some(ClassProbabilities { no_rain, rain }) }
    }

    pub fn will_rain(&self) -> bool {
        self.label == RainLabel::Rain
    }
}
