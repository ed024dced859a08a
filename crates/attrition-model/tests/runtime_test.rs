//! The process-wide asset cache. Runs in its own test binary, so the
//! `OnceLock` starts empty.

use std::path::Path;

use attrition_core::config::AssetsConfig;
use attrition_model::assets::runtime;

#[test]
fn first_initialization_wins() {
    assert!(runtime::get().is_none());

    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/attrition");
    let good = AssetsConfig {
        model_path: Some(dir.join("champion_model.json").display().to_string()),
        columns_path: Some(dir.join("model_columns.json").display().to_string()),
    };
    let first = runtime::initialize(&good);
    assert!(first.is_loaded());

    // A second call with broken paths returns the cached state untouched.
    let broken = AssetsConfig {
        model_path: Some("/nonexistent/model.json".to_string()),
        columns_path: Some("/nonexistent/columns.json".to_string()),
    };
    let second = runtime::initialize(&broken);
    assert!(std::ptr::eq(first, second));
    assert!(second.is_loaded());
    assert!(runtime::get().is_some());
}
