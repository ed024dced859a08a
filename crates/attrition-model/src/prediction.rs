//! Prediction results.

use serde::{Deserialize, Serialize};

use crate::features::{DerivedFeatures, FeatureVector};
use crate::scenario::ScenarioInput;

/// The binary class the classifier predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttritionLabel {
    /// Class 0.
    Stay,
    /// Class 1, the positive class.
    Leave,
}

impl AttritionLabel {
    pub fn class(self) -> u8 {
        match self {
            Self::Stay => 0,
            Self::Leave => 1,
        }
    }
}

/// Label plus the probability of `Leave`, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: AttritionLabel,
    pub probability: f64,
}

/// Everything one submission produced, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioPrediction {
    pub scenario: ScenarioInput,
    pub derived: DerivedFeatures,
    pub vector: FeatureVector,
    pub prediction: Prediction,
}
