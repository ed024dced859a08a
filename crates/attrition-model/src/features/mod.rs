//! Feature assembly: scenario in, schema-ordered vector out.
//!
//! 1. Every schema column starts at 0.
//! 2. The ten form fields overwrite their columns (overtime as 0/1).
//! 3. `Incentive_Ratio` and `Unjustified_Stress` are derived.
//!
//! Columns the form does not cover stay at 0. That matches how the
//! classifier is served today; it is not an imputation policy.

pub mod derived;
pub mod vector;

use std::sync::Arc;

use attrition_core::errors::{ScenarioError, SchemaError};

pub use derived::{DerivedFeatures, INCENTIVE_RATIO_COLUMN, UNJUSTIFIED_STRESS_COLUMN};
pub use vector::FeatureVector;

use crate::scenario::{ScenarioField, ScenarioInput};
use crate::schema::FeatureSchema;

/// Column positions resolved once against a schema.
#[derive(Debug, Clone)]
pub struct FeatureAssembler {
    schema: Arc<FeatureSchema>,
    fields: [(ScenarioField, usize); 10],
    incentive_ratio: usize,
    unjustified_stress: usize,
}

impl FeatureAssembler {
    /// Bind the field → column table to `schema`.
    ///
    /// Fails with `MissingColumn` if any mapped or derived column is absent,
    /// so a renamed training column cannot silently become a constant 0.
    pub fn new(schema: Arc<FeatureSchema>) -> Result<Self, SchemaError> {
        let mut fields = [(ScenarioField::MonthlyIncome, 0); 10];
        for (slot, field) in fields.iter_mut().zip(ScenarioField::ALL) {
            *slot = (field, schema.require(field.column())?);
        }
        let incentive_ratio = schema.require(INCENTIVE_RATIO_COLUMN)?;
        let unjustified_stress = schema.require(UNJUSTIFIED_STRESS_COLUMN)?;

        Ok(Self {
            schema,
            fields,
            incentive_ratio,
            unjustified_stress,
        })
    }

    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Validate `input` and build its feature vector.
    pub fn assemble(&self, input: &ScenarioInput) -> Result<FeatureVector, ScenarioError> {
        input.validate()?;

        let mut vector = FeatureVector::zeroed(Arc::clone(&self.schema));
        for &(field, index) in &self.fields {
            vector.set(index, field.value(input));
        }

        let derived = DerivedFeatures::from_scenario(input);
        vector.set(self.incentive_ratio, derived.incentive_ratio);
        vector.set(self.unjustified_stress, derived.unjustified_stress);

        tracing::trace!(
            columns = vector.values().len(),
            incentive_ratio = derived.incentive_ratio,
            unjustified_stress = derived.unjustified_stress,
            "feature vector assembled"
        );

        Ok(vector)
    }
}
