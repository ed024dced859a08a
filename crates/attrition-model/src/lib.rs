//! # attrition-model
//!
//! Everything between the form and the verdict:
//!
//! | Step | Module |
//! |------|--------|
//! | Load classifier + column list once | `assets` |
//! | Validate the scenario | `scenario` |
//! | Zero-fill, overwrite, derive, order | `features` |
//! | Margin → probability → label | `classifier` |
//!
//! The schema is the single source of column order. The assembler and the
//! classifier both resolve column names against it once, at construction,
//! so a misspelled column fails at load time instead of silently reading 0.

pub mod assets;
pub mod classifier;
pub mod features;
pub mod prediction;
pub mod scenario;
pub mod schema;

pub use assets::{AssetState, Assets};
pub use classifier::{Classifier, CompiledClassifier};
pub use features::{DerivedFeatures, FeatureAssembler, FeatureVector};
pub use prediction::{AttritionLabel, Prediction, ScenarioPrediction};
pub use scenario::{OverTime, ScenarioField, ScenarioInput};
pub use schema::FeatureSchema;
