//! Logistic regression over named columns.

use attrition_core::errors::{ModelError, SchemaError};

use super::artifact::LogisticArtifact;
use super::CompileError;
use crate::schema::FeatureSchema;

#[derive(Debug, Clone)]
pub(crate) struct LogisticModel {
    intercept: f64,
    weights: Vec<(usize, f64)>,
}

impl LogisticModel {
    pub(crate) fn compile(
        artifact: &LogisticArtifact,
        schema: &FeatureSchema,
    ) -> Result<Self, CompileError> {
        if !artifact.intercept.is_finite() {
            return Err(ModelError::NonFiniteParameter {
                name: "intercept".to_string(),
            }
            .into());
        }
        if let Some(ref names) = artifact.feature_names {
            super::check_feature_names(names, schema)?;
        }

        let mut weights = Vec::with_capacity(artifact.coefficients.len());
        for (column, &weight) in &artifact.coefficients {
            if !weight.is_finite() {
                return Err(ModelError::NonFiniteParameter {
                    name: format!("coefficients.{column}"),
                }
                .into());
            }
            let index = schema
                .position(column)
                .ok_or_else(|| SchemaError::UnknownFeature {
                    feature: column.clone(),
                })?;
            weights.push((index, weight));
        }

        Ok(Self {
            intercept: artifact.intercept,
            weights,
        })
    }

    pub(crate) fn margin(&self, values: &[f64]) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .map(|&(index, weight)| weight * values[index])
                .sum::<f64>()
    }
}
