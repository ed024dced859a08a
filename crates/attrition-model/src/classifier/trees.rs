//! Gradient-boosted tree ensemble, flattened for evaluation.

use rustc_hash::{FxHashMap, FxHashSet};

use attrition_core::errors::{ModelError, SchemaError};

use super::artifact::{TreeEnsembleArtifact, TreeNodeArtifact};
use super::CompileError;
use crate::schema::FeatureSchema;

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        yes: usize,
        no: usize,
        missing: usize,
    },
    Leaf(f64),
}

/// One tree as an arena; index 0 is the root. Acyclic by construction.
#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn leaf_value(&self, values: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    let x = values[feature];
                    index = if x.is_nan() {
                        missing
                    } else if x < threshold {
                        yes
                    } else {
                        no
                    };
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TreeEnsemble {
    base_margin: f64,
    trees: Vec<Tree>,
}

impl TreeEnsemble {
    pub(crate) fn compile(
        artifact: &TreeEnsembleArtifact,
        schema: &FeatureSchema,
    ) -> Result<Self, CompileError> {
        if artifact.trees.is_empty() {
            return Err(ModelError::EmptyEnsemble.into());
        }
        let base = artifact.base_score;
        if !(base > 0.0 && base < 1.0) {
            return Err(ModelError::InvalidBaseScore { value: base }.into());
        }
        if let Some(ref names) = artifact.feature_names {
            super::check_feature_names(names, schema)?;
        }

        let trees = artifact
            .trees
            .iter()
            .enumerate()
            .map(|(i, root)| compile_tree(i, root, schema))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            base_margin: (base / (1.0 - base)).ln(),
            trees,
        })
    }

    pub(crate) fn margin(&self, values: &[f64]) -> f64 {
        self.base_margin
            + self
                .trees
                .iter()
                .map(|tree| tree.leaf_value(values))
                .sum::<f64>()
    }

    pub(crate) fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

fn compile_tree(
    tree: usize,
    root: &TreeNodeArtifact,
    schema: &FeatureSchema,
) -> Result<Tree, CompileError> {
    let mut by_id: FxHashMap<u32, &TreeNodeArtifact> = FxHashMap::default();
    index_nodes(tree, root, &mut by_id)?;

    // Breadth-first from the root; arena slots are handed out on first visit.
    let mut slots: FxHashMap<u32, usize> = FxHashMap::default();
    let mut order: Vec<u32> = vec![root.nodeid()];
    slots.insert(root.nodeid(), 0);
    let mut nodes = Vec::with_capacity(by_id.len());
    let mut cursor = 0;

    while cursor < order.len() {
        let id = order[cursor];
        cursor += 1;
        let node = by_id
            .get(&id)
            .copied()
            .ok_or(ModelError::MissingNode { tree, node: id })?;

        match node {
            TreeNodeArtifact::Leaf { leaf, .. } => {
                if !leaf.is_finite() {
                    return Err(ModelError::NonFiniteParameter {
                        name: format!("tree {tree} node {id} leaf"),
                    }
                    .into());
                }
                nodes.push(Node::Leaf(*leaf));
            }
            TreeNodeArtifact::Split {
                split,
                split_condition,
                yes,
                no,
                missing,
                ..
            } => {
                if !split_condition.is_finite() {
                    return Err(ModelError::NonFiniteParameter {
                        name: format!("tree {tree} node {id} split_condition"),
                    }
                    .into());
                }
                let feature = schema
                    .position(split)
                    .ok_or_else(|| SchemaError::UnknownFeature {
                        feature: split.clone(),
                    })?;
                let missing = missing.unwrap_or(*yes);

                let mut seen_here = FxHashSet::default();
                for target in [*yes, *no, missing] {
                    if !seen_here.insert(target) {
                        continue;
                    }
                    if !by_id.contains_key(&target) {
                        return Err(ModelError::MissingNode { tree, node: target }.into());
                    }
                    if slots.contains_key(&target) {
                        return Err(ModelError::TreeCycle { tree, node: target }.into());
                    }
                    slots.insert(target, order.len());
                    order.push(target);
                }

                nodes.push(Node::Split {
                    feature,
                    threshold: *split_condition,
                    yes: slots[yes],
                    no: slots[no],
                    missing: slots[&missing],
                });
            }
        }
    }

    Ok(Tree { nodes })
}

fn index_nodes<'a>(
    tree: usize,
    node: &'a TreeNodeArtifact,
    by_id: &mut FxHashMap<u32, &'a TreeNodeArtifact>,
) -> Result<(), CompileError> {
    if by_id.insert(node.nodeid(), node).is_some() {
        return Err(ModelError::TreeCycle {
            tree,
            node: node.nodeid(),
        }
        .into());
    }
    if let TreeNodeArtifact::Split { children, .. } = node {
        for child in children {
            index_nodes(tree, child, by_id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["OverTime".into(), "Incentive_Ratio".into()]).unwrap()
    }

    fn artifact(json: &str) -> TreeEnsembleArtifact {
        serde_json::from_str(json).unwrap()
    }

    const STUMP: &str = r#"{
        "base_score": 0.5,
        "trees": [
            { "nodeid": 0, "split": "OverTime", "split_condition": 0.5,
              "yes": 1, "no": 2, "missing": 1,
              "children": [ { "nodeid": 1, "leaf": -1.0 }, { "nodeid": 2, "leaf": 2.0 } ] },
            { "nodeid": 0, "split": "Incentive_Ratio", "split_condition": 0.05,
              "yes": 1, "no": 2,
              "children": [ { "nodeid": 1, "leaf": 0.5 }, { "nodeid": 2, "leaf": -0.5 } ] }
        ]
    }"#;

    #[test]
    fn sums_leaves_over_trees() {
        let ensemble = TreeEnsemble::compile(&artifact(STUMP), &schema()).unwrap();
        assert_eq!(ensemble.tree_count(), 2);
        // base_score 0.5 contributes a zero margin.
        assert!((ensemble.margin(&[0.0, 0.01]) - (-0.5)).abs() < 1e-12);
        assert!((ensemble.margin(&[1.0, 0.01]) - 2.5).abs() < 1e-12);
        assert!((ensemble.margin(&[1.0, 0.2]) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn split_uses_strict_less_than() {
        let ensemble = TreeEnsemble::compile(&artifact(STUMP), &schema()).unwrap();
        // 0.05 is not < 0.05, so the second tree goes to "no".
        assert!((ensemble.margin(&[0.0, 0.05]) - (-1.5)).abs() < 1e-12);
    }

    #[test]
    fn nan_follows_missing_branch() {
        let ensemble = TreeEnsemble::compile(&artifact(STUMP), &schema()).unwrap();
        // Second tree has no explicit "missing" and falls back to "yes".
        assert!((ensemble.margin(&[f64::NAN, f64::NAN]) - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn base_score_seeds_the_margin() {
        let json = r#"{ "base_score": 0.25, "trees": [ { "nodeid": 0, "leaf": 0.0 } ] }"#;
        let ensemble = TreeEnsemble::compile(&artifact(json), &schema()).unwrap();
        assert!((ensemble.margin(&[0.0, 0.0]) - (1.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn unknown_split_feature_is_a_schema_error() {
        let json = r#"{ "trees": [ { "nodeid": 0, "split": "Salary", "split_condition": 1.0,
            "yes": 1, "no": 2, "children": [ { "nodeid": 1, "leaf": 0.0 }, { "nodeid": 2, "leaf": 0.0 } ] } ] }"#;
        let err = TreeEnsemble::compile(&artifact(json), &schema()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Schema(SchemaError::UnknownFeature { ref feature }) if feature == "Salary"
        ));
    }

    #[test]
    fn dangling_child_reference_is_rejected() {
        let json = r#"{ "trees": [ { "nodeid": 0, "split": "OverTime", "split_condition": 0.5,
            "yes": 1, "no": 7, "children": [ { "nodeid": 1, "leaf": 0.0 } ] } ] }"#;
        let err = TreeEnsemble::compile(&artifact(json), &schema()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Model(ModelError::MissingNode { tree: 0, node: 7 })
        ));
    }

    #[test]
    fn back_edge_is_rejected() {
        let json = r#"{ "trees": [ { "nodeid": 0, "split": "OverTime", "split_condition": 0.5,
            "yes": 1, "no": 0, "children": [ { "nodeid": 1, "leaf": 0.0 } ] } ] }"#;
        let err = TreeEnsemble::compile(&artifact(json), &schema()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Model(ModelError::TreeCycle { tree: 0, node: 0 })
        ));
    }

    #[test]
    fn empty_ensemble_and_bad_base_score_are_rejected() {
        let err = TreeEnsemble::compile(&artifact(r#"{ "trees": [] }"#), &schema()).unwrap_err();
        assert!(matches!(err, CompileError::Model(ModelError::EmptyEnsemble)));

        let json = r#"{ "base_score": 1.0, "trees": [ { "nodeid": 0, "leaf": 0.0 } ] }"#;
        let err = TreeEnsemble::compile(&artifact(json), &schema()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Model(ModelError::InvalidBaseScore { .. })
        ));
    }
}
