//! Verdict text for the predicted label.

use serde::Serialize;

use attrition_model::{AttritionLabel, DerivedFeatures};

pub const HIGH_RISK_MESSAGE: &str = "High Risk: This employee is likely to leave.";
pub const SAFE_MESSAGE: &str = "Safe: This employee is likely to stay.";
pub const SMALL_BONUS_INSIGHT: &str = "Insight: The bonus is too small relative to their salary.";

/// Incentive ratios below this get the small-bonus insight.
pub const SMALL_BONUS_RATIO: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub label: AttritionLabel,
    pub headline: &'static str,
    /// Only for `Leave`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_factor: Option<String>,
    /// Only for `Leave` with an incentive ratio under 0.05.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<&'static str>,
}

impl Verdict {
    pub fn new(label: AttritionLabel, derived: &DerivedFeatures) -> Self {
        match label {
            AttritionLabel::Leave => Self {
                label,
                headline: HIGH_RISK_MESSAGE,
                key_factor: Some(format!(
                    "The calculated Incentive Ratio is {:.3}.",
                    derived.incentive_ratio
                )),
                insight: (derived.incentive_ratio < SMALL_BONUS_RATIO)
                    .then_some(SMALL_BONUS_INSIGHT),
            },
            AttritionLabel::Stay => Self {
                label,
                headline: SAFE_MESSAGE,
                key_factor: None,
                insight: None,
            },
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.label == AttritionLabel::Leave
    }
}
