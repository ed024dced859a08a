//! Report assembly: one value per submission, rendered by a formatter.

use serde::Serialize;

use attrition_core::config::ReportConfig;
use attrition_core::errors::{AssetError, AttritionErrorCode};
use attrition_model::{DerivedFeatures, Prediction, ScenarioInput, ScenarioPrediction};

use crate::cost::ReplacementCost;
use crate::gauge::Gauge;
use crate::verdict::Verdict;

pub const APP_NAME: &str = "HR Analytics: Attrition Predictor";
pub const TITLE: &str = "Employee Attrition Prediction System";
pub const MISSING_ASSETS_WARNING: &str = "Please ensure model files are in the same directory.";

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub app: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Predicted(Box<PredictedView>),
    Unavailable(UnavailableView),
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictedView {
    pub scenario: ScenarioInput,
    pub derived: DerivedFeatures,
    pub prediction: Prediction,
    pub gauge: Gauge,
    pub verdict: Verdict,
    pub cost: ReplacementCost,
}

/// Shown instead of gauge and verdict when the assets failed to load.
#[derive(Debug, Clone, Serialize)]
pub struct UnavailableView {
    pub warning: &'static str,
    pub code: &'static str,
    pub detail: String,
}

impl Report {
    pub fn predicted(result: &ScenarioPrediction, model: &str, config: &ReportConfig) -> Self {
        let view = PredictedView {
            scenario: result.scenario,
            derived: result.derived,
            prediction: result.prediction,
            gauge: Gauge::from_probability(result.prediction.probability),
            verdict: Verdict::new(result.prediction.label, &result.derived),
            cost: ReplacementCost::estimate(
                result.scenario.monthly_income,
                config.effective_currency_symbol(),
            ),
        };
        tracing::debug!(
            band = view.gauge.band.name(),
            cost = view.cost.amount,
            "report built"
        );
        Self {
            app: APP_NAME,
            title: TITLE,
            model: Some(model.to_string()),
            outcome: Outcome::Predicted(Box::new(view)),
            footer: config
                .effective_show_footer()
                .then(|| format!("Model: {model}")),
        }
    }

    pub fn unavailable(error: &AssetError) -> Self {
        Self {
            app: APP_NAME,
            title: TITLE,
            model: None,
            outcome: Outcome::Unavailable(UnavailableView {
                warning: MISSING_ASSETS_WARNING,
                code: error.error_code(),
                detail: error.to_string(),
            }),
            footer: None,
        }
    }

    /// The prediction view, when there is one.
    pub fn predicted_view(&self) -> Option<&PredictedView> {
        match &self.outcome {
            Outcome::Predicted(view) => Some(view),
            Outcome::Unavailable(_) => None,
        }
    }

    /// One-paragraph description of the model, shown under the title.
    pub fn intro(&self) -> Option<String> {
        self.intro_with(str::to_string)
    }

    /// The intro with the model name and feature names passed through
    /// `emphasize`, for formats that mark them up.
    pub fn intro_with(&self, emphasize: impl Fn(&str) -> String) -> Option<String> {
        self.model.as_deref().map(|model| {
            format!(
                "This tool uses {} to predict employee turnover. It incorporates \
                 feature engineering including {} and {}.",
                emphasize(model),
                emphasize("Incentive Ratio"),
                emphasize("Stress-to-Level Ratio")
            )
        })
    }
}
