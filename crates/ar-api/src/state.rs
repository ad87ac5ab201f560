//! Application state shared across handlers.

use std::sync::Arc;
use tracing::info;

use ar_core::seed::demo_assets;
use ar_core::{AssetStore, InMemoryAssetStore, InMemorySettingsStore, SettingsStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Asset register.
    pub assets: Arc<dyn AssetStore>,
    /// Company settings.
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    /// Creates a new application state from explicit stores.
    pub fn new(assets: Arc<dyn AssetStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { assets, settings }
    }

    /// Creates an empty in-memory register for the given company.
    pub fn in_memory(company_name: impl Into<String>) -> Self {
        Self::new(
            Arc::new(InMemoryAssetStore::new()),
            Arc::new(InMemorySettingsStore::new(company_name)),
        )
    }

    /// Creates an in-memory register pre-loaded with the demo inventory.
    pub fn with_demo_data(company_name: impl Into<String>) -> Self {
        let seed = demo_assets();
        info!(assets = seed.len(), "Seeding register with demo assets");
        Self::new(
            Arc::new(InMemoryAssetStore::with_assets(seed)),
            Arc::new(InMemorySettingsStore::new(company_name)),
        )
    }
}
