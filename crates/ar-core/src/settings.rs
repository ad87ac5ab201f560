//! Company settings store.
//!
//! Holds the process-wide company name shown on every page and label.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Company name used when no other name is configured.
pub const DEFAULT_COMPANY_NAME: &str = "Meraki Communications";

/// Trait for reading and writing company settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the current company name.
    async fn company_name(&self) -> String;

    /// Replaces the company name.
    async fn set_company_name(&self, name: String);
}

/// In-memory implementation of SettingsStore.
pub struct InMemorySettingsStore {
    company_name: Arc<RwLock<String>>,
}

impl InMemorySettingsStore {
    /// Creates a settings store with the given company name.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: Arc::new(RwLock::new(company_name.into())),
        }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_NAME)
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn company_name(&self) -> String {
        self.company_name.read().await.clone()
    }

    async fn set_company_name(&self, name: String) {
        *self.company_name.write().await = name;
    }
}
