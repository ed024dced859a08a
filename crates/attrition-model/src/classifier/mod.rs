//! Classifiers: compile an artifact against a schema, then score vectors.

pub mod artifact;
mod logistic;
mod trees;

use std::sync::Arc;

use attrition_core::errors::{InferenceError, ModelError, SchemaError, SubmissionError};

pub use artifact::{ClassifierArtifact, ModelArtifact};

use crate::features::FeatureVector;
use crate::prediction::{AttritionLabel, Prediction};
use crate::schema::FeatureSchema;
use logistic::LogisticModel;
use trees::TreeEnsemble;

/// Default probability cut-off between `Stay` and `Leave`.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Why an artifact could not be bound to a schema.
#[derive(Debug)]
pub enum CompileError {
    Model(ModelError),
    Schema(SchemaError),
}

impl From<ModelError> for CompileError {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

impl From<SchemaError> for CompileError {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err)
    }
}

/// A binary classifier with a `predict` / `predict_proba` contract.
pub trait Classifier {
    /// Columns, in order, that this classifier reads.
    fn schema(&self) -> &Arc<FeatureSchema>;

    /// Raw log-odds for values already known to match `schema()`.
    fn margin(&self, values: &[f64]) -> f64;

    /// Probability above which the label is `Leave`.
    fn threshold(&self) -> f64 {
        DEFAULT_THRESHOLD
    }

    /// Probability of the positive (`Leave`) class.
    fn predict_proba(&self, vector: &FeatureVector) -> Result<f64, SubmissionError> {
        ensure_aligned(self.schema(), vector)?;
        let margin = self.margin(vector.values());
        if !margin.is_finite() {
            return Err(InferenceError::NonFiniteMargin.into());
        }
        Ok(sigmoid(margin))
    }

    /// Label and probability in one pass.
    fn predict(&self, vector: &FeatureVector) -> Result<Prediction, SubmissionError> {
        let probability = self.predict_proba(vector)?;
        let label = if probability > self.threshold() {
            AttritionLabel::Leave
        } else {
            AttritionLabel::Stay
        };
        Ok(Prediction { label, probability })
    }
}

#[derive(Debug, Clone)]
enum CompiledModel {
    Trees(TreeEnsemble),
    Logistic(LogisticModel),
}

/// A classifier artifact whose feature references are resolved to
/// positions in one schema.
#[derive(Debug, Clone)]
pub struct CompiledClassifier {
    name: String,
    threshold: f64,
    schema: Arc<FeatureSchema>,
    model: CompiledModel,
}

impl CompiledClassifier {
    pub fn compile(
        artifact: &ClassifierArtifact,
        schema: Arc<FeatureSchema>,
    ) -> Result<Self, CompileError> {
        let threshold = artifact.threshold.unwrap_or(DEFAULT_THRESHOLD);
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ModelError::InvalidThreshold { value: threshold }.into());
        }

        let (model, default_name) = match &artifact.model {
            ModelArtifact::GradientBoostedTrees(trees) => (
                CompiledModel::Trees(TreeEnsemble::compile(trees, &schema)?),
                "XGBoost Classifier",
            ),
            ModelArtifact::LogisticRegression(logistic) => (
                CompiledModel::Logistic(LogisticModel::compile(logistic, &schema)?),
                "Logistic Regression",
            ),
        };

        Ok(Self {
            name: artifact
                .name
                .clone()
                .unwrap_or_else(|| default_name.to_string()),
            threshold,
            schema,
            model,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of boosted trees, for tree ensembles.
    pub fn tree_count(&self) -> Option<usize> {
        match &self.model {
            CompiledModel::Trees(trees) => Some(trees.tree_count()),
            CompiledModel::Logistic(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.model {
            CompiledModel::Trees(_) => "gradient_boosted_trees",
            CompiledModel::Logistic(_) => "logistic_regression",
        }
    }
}

impl Classifier for CompiledClassifier {
    fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    fn margin(&self, values: &[f64]) -> f64 {
        match &self.model {
            CompiledModel::Trees(trees) => trees.margin(values),
            CompiledModel::Logistic(logistic) => logistic.margin(values),
        }
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// A vector is only scored against the exact column list it was built for.
pub fn ensure_aligned(expected: &Arc<FeatureSchema>, vector: &FeatureVector) -> Result<(), SchemaError> {
    if Arc::ptr_eq(expected, vector.schema()) {
        return Ok(());
    }
    if vector.values().len() != expected.len() {
        return Err(SchemaError::WidthMismatch {
            expected: expected.len(),
            found: vector.values().len(),
        });
    }
    expected.check_order(vector.schema().columns())
}

/// Exported `feature_names` must be the schema, in order.
pub(crate) fn check_feature_names(names: &[String], schema: &FeatureSchema) -> Result<(), SchemaError> {
    schema.check_order(names)
}

pub fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}
