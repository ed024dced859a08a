//! Process-wide asset cache: a `OnceLock`, lock-free after first load.
//!
//! The first `initialize()` decides the state for the life of the process,
//! including `Unavailable`. Later calls return the cached state unchanged.

use std::sync::OnceLock;

use attrition_core::config::AssetsConfig;

use super::AssetState;

static ASSETS: OnceLock<AssetState> = OnceLock::new();

/// Load the assets once and return the cached state.
pub fn initialize(config: &AssetsConfig) -> &'static AssetState {
    ASSETS.get_or_init(|| AssetState::load(config))
}

/// The cached state, if `initialize()` has run.
pub fn get() -> Option<&'static AssetState> {
    ASSETS.get()
}
