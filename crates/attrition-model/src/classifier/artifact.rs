//! On-disk classifier format, as exported by the training pipeline.
//!
//! ```json
//! { "kind": "gradient_boosted_trees", "name": "XGBoost Classifier",
//!   "base_score": 0.5, "feature_names": ["Age", ...],
//!   "trees": [ { "nodeid": 0, "split": "OverTime", "split_condition": 0.5,
//!                "yes": 1, "no": 2, "missing": 1,
//!                "children": [ { "nodeid": 1, "leaf": -0.4 }, { "nodeid": 2, "leaf": 0.6 } ] } ] }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Display name. Defaults per model kind.
    #[serde(default)]
    pub name: Option<String>,
    /// Probability above which the label is `Leave`. Default: 0.5.
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(flatten)]
    pub model: ModelArtifact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    GradientBoostedTrees(TreeEnsembleArtifact),
    LogisticRegression(LogisticArtifact),
}

/// XGBoost `binary:logistic` dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsembleArtifact {
    /// Prior probability; its logit seeds the margin.
    #[serde(default = "default_base_score")]
    pub base_score: f64,
    /// Training columns, when the exporter recorded them.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub trees: Vec<TreeNodeArtifact>,
}

/// One node of a dumped tree. Children are nested; `yes`/`no`/`missing`
/// refer to them by `nodeid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNodeArtifact {
    Split {
        nodeid: u32,
        split: String,
        split_condition: f64,
        yes: u32,
        no: u32,
        #[serde(default)]
        missing: Option<u32>,
        children: Vec<TreeNodeArtifact>,
    },
    Leaf {
        nodeid: u32,
        leaf: f64,
    },
}

impl TreeNodeArtifact {
    pub fn nodeid(&self) -> u32 {
        match self {
            Self::Split { nodeid, .. } | Self::Leaf { nodeid, .. } => *nodeid,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub intercept: f64,
    /// Weight per column; columns not listed weigh 0.
    pub coefficients: BTreeMap<String, f64>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

fn default_base_score() -> f64 {
    0.5
}
