//! Tests for the error handling system.

use attrition_core::errors::error_code::{self, AttritionErrorCode};
use attrition_core::errors::*;

#[test]
fn every_error_has_an_error_code() {
    let config = ConfigError::FileNotFound {
        path: "/tmp/attrition.toml".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let assets = AssetError::NotFound {
        path: "champion_model.json".into(),
    };
    assert_eq!(assets.error_code(), error_code::ASSETS_UNAVAILABLE);

    let schema = SchemaError::MissingColumn {
        column: "Incentive".into(),
    };
    assert_eq!(schema.error_code(), error_code::SCHEMA_MISMATCH);

    let scenario = ScenarioError::OutOfRange {
        field: "job_level",
        value: 0,
        min: 1,
        max: 5,
    };
    assert_eq!(scenario.error_code(), error_code::INVALID_SCENARIO);

    assert_eq!(
        InferenceError::NonFiniteMargin.error_code(),
        error_code::INFERENCE_ERROR
    );
    assert_eq!(
        InferenceError::AssetsUnavailable {
            reason: "missing".into()
        }
        .error_code(),
        error_code::ASSETS_UNAVAILABLE
    );
}

#[test]
fn submission_error_keeps_subsystem_code() {
    let err: SubmissionError = SchemaError::WidthMismatch {
        expected: 40,
        found: 39,
    }
    .into();
    assert!(matches!(err, SubmissionError::Schema(_)));
    assert_eq!(err.error_code(), error_code::SCHEMA_MISMATCH);

    let err: SubmissionError = InferenceError::NonFiniteMargin.into();
    assert_eq!(err.error_code(), error_code::INFERENCE_ERROR);
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = ScenarioError::OutOfRange {
        field: "stress_rating",
        value: 7,
        min: 1,
        max: 4,
    };
    assert_eq!(
        err.coded_string(),
        "[INVALID_SCENARIO] stress_rating = 7 is outside the allowed range 1..=4"
    );
}

#[test]
fn incompatible_asset_error_exposes_schema_source() {
    use std::error::Error;

    let err = AssetError::Incompatible {
        path: "champion_model.json".into(),
        source: SchemaError::UnknownFeature {
            feature: "Salary".into(),
        },
    };
    let source = err.source().expect("schema source");
    assert!(source.to_string().contains("Salary"));
}

#[test]
fn model_errors_surface_through_asset_errors() {
    let err = AssetError::Invalid {
        path: "champion_model.json".into(),
        source: ModelError::MissingNode { tree: 3, node: 9 },
    };
    assert_eq!(err.error_code(), error_code::ASSETS_UNAVAILABLE);
    assert!(err.to_string().contains("Tree 3 has no node 9"));
    assert_eq!(
        ModelError::EmptyEnsemble.error_code(),
        error_code::INVALID_MODEL
    );
}

#[test]
fn column_disagreement_reports_schema_mismatch() {
    let err = AssetError::Incompatible {
        path: "champion_model.json".into(),
        source: SchemaError::ColumnOrder {
            position: 0,
            expected: "BusinessTravel_Travel_Frequently".into(),
            found: "Age".into(),
        },
    };
    assert!(err.is_schema_mismatch());
    assert_eq!(err.error_code(), error_code::SCHEMA_MISMATCH);
    assert!(err
        .to_string()
        .ends_with("Column 0 is 'Age' where the schema has 'BusinessTravel_Travel_Frequently'"));

    let missing = AssetError::NotFound {
        path: "model_columns.json".into(),
    };
    assert!(!missing.is_schema_mismatch());
}
