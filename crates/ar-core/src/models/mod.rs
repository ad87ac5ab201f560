//! Data models for the asset register.

mod asset;

pub use asset::{Asset, AssetDraft, AssetForm, AssetId};
