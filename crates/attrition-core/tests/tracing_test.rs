//! Tests for the tracing setup.

use std::sync::Mutex;

use attrition_core::tracing::init_tracing;

/// Serializes tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_accepts_per_crate_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ATTRITION_LOG", "attrition_model=debug,attrition_report=warn");
    init_tracing();
    std::env::remove_var("ATTRITION_LOG");
}

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn invalid_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ATTRITION_LOG", "[[not a filter");
    init_tracing();
    std::env::remove_var("ATTRITION_LOG");
}
