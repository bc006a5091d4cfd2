use std::ops::Index;
use serde::Serialize;
use crate::models::weather_reading::Field;

/// Number of features the classifier is fed with
pub const FEATURE_COUNT: usize = 7;

/// Column order the classifier was trained on, a reordering silently corrupts predictions
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "pressure",
    "dewpoint",
    "humidity",
    "cloud",
    "sunshine",
    "winddirection",
    "windspeed",
];

/// One row of classifier input, values in FEATURE_ORDER
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns feature name and value pairs in column order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_ORDER.iter().copied().zip(self.0.iter().copied())
    }
}

impl Index<Field> for FeatureVector {
    type Output = f64;

    fn index(&self, field: Field) -> &Self::Output {
        &self.0[field as usize]
    }
}
