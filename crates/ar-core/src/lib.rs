//! # ar-core
//!
//! Domain model, in-memory stores, list-view query pipeline and commands
//! for Asset Register.

pub mod asset_store;
pub mod commands;
pub mod models;
pub mod query;
pub mod seed;
pub mod settings;

pub use asset_store::{AssetStore, AssetStoreError, AssetStoreResult, InMemoryAssetStore};
pub use commands::{CommandError, CommandResult, CompanyRename};
pub use models::{Asset, AssetDraft, AssetForm, AssetId};
pub use query::{run_query, AssetQuery, AssetView, SortKey, SortOrder};
pub use settings::{InMemorySettingsStore, SettingsStore, DEFAULT_COMPANY_NAME};
