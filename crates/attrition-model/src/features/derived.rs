//! The two engineered ratios the classifier was trained with.

use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioInput;

/// Column holding `incentive / (monthly_income + 1)`.
pub const INCENTIVE_RATIO_COLUMN: &str = "Incentive_Ratio";

/// Column holding `stress_rating / job_level`.
pub const UNJUSTIFIED_STRESS_COLUMN: &str = "Unjustified_Stress";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub incentive_ratio: f64,
    pub unjustified_stress: f64,
}

impl DerivedFeatures {
    /// Compute both ratios. Expects a validated scenario (`job_level >= 1`).
    pub fn from_scenario(input: &ScenarioInput) -> Self {
        Self {
            incentive_ratio: incentive_ratio(input.incentive, input.monthly_income),
            unjustified_stress: unjustified_stress(input.stress_rating, input.job_level),
        }
    }
}

/// `incentive / (income + 1)`. The `+ 1` is smoothing carried over from training.
pub fn incentive_ratio(incentive: u32, monthly_income: u32) -> f64 {
    f64::from(incentive) / (f64::from(monthly_income) + 1.0)
}

/// `stress / job_level`. `job_level` is bounded to >= 1 by scenario validation.
pub fn unjustified_stress(stress_rating: u32, job_level: u32) -> f64 {
    f64::from(stress_rating) / f64::from(job_level)
}
