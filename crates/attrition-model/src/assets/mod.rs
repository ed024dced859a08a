//! Model assets: the column list and the classifier, loaded together.
//!
//! Loading never panics. Any failure yields `AssetState::Unavailable`,
//! and every prediction path checks the state before doing work.

pub mod runtime;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;

use attrition_core::config::AssetsConfig;
use attrition_core::errors::{AssetError, InferenceError, SubmissionError};

use crate::classifier::{ClassifierArtifact, Classifier, CompileError, CompiledClassifier};
use crate::features::{DerivedFeatures, FeatureAssembler};
use crate::prediction::ScenarioPrediction;
use crate::scenario::ScenarioInput;
use crate::schema::FeatureSchema;

/// A schema, a classifier compiled against it, and an assembler bound to it.
/// Immutable once built.
#[derive(Debug)]
pub struct Assets {
    schema: Arc<FeatureSchema>,
    classifier: CompiledClassifier,
    assembler: FeatureAssembler,
}

impl Assets {
    /// Read and validate both artifacts.
    pub fn load(model_path: &Path, columns_path: &Path) -> Result<Self, AssetError> {
        let started = Instant::now();

        let columns: Vec<String> = read_artifact(columns_path)?;
        let schema = FeatureSchema::new(columns)
            .map(Arc::new)
            .map_err(|source| AssetError::InvalidColumns {
                path: columns_path.display().to_string(),
                source,
            })?;

        let artifact: ClassifierArtifact = read_artifact(model_path)?;
        let assets = Self::from_parts(schema, &artifact, model_path, columns_path)?;

        tracing::info!(
            model = assets.classifier.name(),
            kind = assets.classifier.kind(),
            trees = assets.classifier.tree_count(),
            columns = assets.schema.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "model assets loaded"
        );
        Ok(assets)
    }

    /// Bind an already-deserialized artifact to a schema.
    pub fn from_parts(
        schema: Arc<FeatureSchema>,
        artifact: &ClassifierArtifact,
        model_path: &Path,
        columns_path: &Path,
    ) -> Result<Self, AssetError> {
        let model = model_path.display().to_string();
        let classifier =
            CompiledClassifier::compile(artifact, Arc::clone(&schema)).map_err(|err| match err {
                CompileError::Model(source) => AssetError::Invalid {
                    path: model.clone(),
                    source,
                },
                CompileError::Schema(source) => AssetError::Incompatible {
                    path: model.clone(),
                    source,
                },
            })?;
        let assembler = FeatureAssembler::new(Arc::clone(&schema)).map_err(|source| {
            AssetError::InvalidColumns {
                path: columns_path.display().to_string(),
                source,
            }
        })?;

        Ok(Self {
            schema,
            classifier,
            assembler,
        })
    }

    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    pub fn classifier(&self) -> &CompiledClassifier {
        &self.classifier
    }

    pub fn assembler(&self) -> &FeatureAssembler {
        &self.assembler
    }

    /// Assemble, then infer. One submission.
    pub fn predict(&self, scenario: &ScenarioInput) -> Result<ScenarioPrediction, SubmissionError> {
        let vector = self.assembler.assemble(scenario)?;
        let prediction = self.classifier.predict(&vector)?;
        let derived = DerivedFeatures::from_scenario(scenario);

        tracing::debug!(
            probability = prediction.probability,
            label = prediction.label.class(),
            incentive_ratio = derived.incentive_ratio,
            "prediction complete"
        );

        Ok(ScenarioPrediction {
            scenario: *scenario,
            derived,
            vector,
            prediction,
        })
    }
}

/// Loaded assets, or the reason there are none.
#[derive(Debug)]
pub enum AssetState {
    Loaded(Arc<Assets>),
    Unavailable(AssetError),
}

impl AssetState {
    /// Load from configured paths. Failures become `Unavailable`.
    pub fn load(config: &AssetsConfig) -> Self {
        let model_path = config.effective_model_path();
        let columns_path = config.effective_columns_path();
        match Assets::load(&model_path, &columns_path) {
            Ok(assets) => Self::Loaded(Arc::new(assets)),
            Err(err) => {
                tracing::warn!(error = %err, "model assets unavailable");
                Self::Unavailable(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The assets, or `AssetsUnavailable` for callers to check.
    pub fn assets(&self) -> Result<&Arc<Assets>, InferenceError> {
        match self {
            Self::Loaded(assets) => Ok(assets),
            Self::Unavailable(err) => Err(InferenceError::AssetsUnavailable {
                reason: err.to_string(),
            }),
        }
    }

    pub fn error(&self) -> Option<&AssetError> {
        match self {
            Self::Loaded(_) => None,
            Self::Unavailable(err) => Some(err),
        }
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, AssetError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AssetError::NotFound {
            path: path.display().to_string(),
        },
        _ => AssetError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })?;
    serde_json::from_str(&content).map_err(|e| AssetError::Deserialize {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
