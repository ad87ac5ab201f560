//! Asset Store.
//!
//! Provides the storage trait and the in-memory implementation that holds
//! the register for the lifetime of the process.

use crate::models::{Asset, AssetDraft, AssetId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur in the asset store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetStoreError {
    /// No asset carries the identifier.
    #[error("Asset {0} not found")]
    NotFound(AssetId),
    /// The identifier counter has reached `AssetId::MAX`.
    #[error("Asset identifiers exhausted")]
    IdsExhausted,
}

/// Result type for asset store operations.
pub type AssetStoreResult<T> = Result<T, AssetStoreError>;

/// Trait for storing and retrieving assets.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Returns every asset in insertion order.
    async fn all(&self) -> AssetStoreResult<Vec<Asset>>;

    /// Find an asset by its identifier.
    async fn find_by_id(&self, id: AssetId) -> AssetStoreResult<Option<Asset>>;

    /// Allocates a fresh identifier, appends the asset and returns the stored record.
    async fn insert(&self, draft: AssetDraft) -> AssetStoreResult<Asset>;

    /// Overwrites every field but the identifier and returns the stored record.
    ///
    /// Fails with [`AssetStoreError::NotFound`] without touching the store
    /// when `id` is absent.
    async fn replace(&self, id: AssetId, draft: AssetDraft) -> AssetStoreResult<Asset>;

    /// Removes an asset, failing with [`AssetStoreError::NotFound`] when
    /// `id` is absent.
    async fn remove(&self, id: AssetId) -> AssetStoreResult<()>;

    /// Count stored assets.
    async fn count(&self) -> AssetStoreResult<u64>;
}

// ============================================================================
// In-Memory Implementation
// ============================================================================

struct Register {
    assets: Vec<Asset>,
    /// `None` once `AssetId::MAX` has been handed out.
    next_id: Option<AssetId>,
}

impl Register {
    fn allocate_id(&mut self) -> AssetStoreResult<AssetId> {
        let id = self.next_id.ok_or(AssetStoreError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    fn position(&self, id: AssetId) -> AssetStoreResult<usize> {
        self.assets
            .iter()
            .position(|a| a.id == id)
            .ok_or(AssetStoreError::NotFound(id))
    }
}

/// In-memory implementation of AssetStore.
///
/// Identifiers come from a monotonic counter that starts one past the
/// largest seeded identifier and is never rewound, so ids of deleted assets
/// are not handed out again.
pub struct InMemoryAssetStore {
    register: Arc<RwLock<Register>>,
}

impl InMemoryAssetStore {
    /// Creates a new empty in-memory asset store.
    pub fn new() -> Self {
        Self::with_assets(Vec::new())
    }

    /// Creates a store pre-populated with existing records.
    ///
    /// Records keep their identifiers. Later records with an identifier
    /// already present are dropped.
    pub fn with_assets(seed: Vec<Asset>) -> Self {
        let mut assets: Vec<Asset> = Vec::with_capacity(seed.len());
        for asset in seed {
            if assets.iter().any(|a| a.id == asset.id) {
                tracing::warn!(asset_id = asset.id, "Skipping seed asset with duplicate id");
                continue;
            }
            assets.push(asset);
        }
        let next_id = match assets.iter().map(|a| a.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Self {
            register: Arc::new(RwLock::new(Register { assets, next_id })),
        }
    }
}

impl Default for InMemoryAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn all(&self) -> AssetStoreResult<Vec<Asset>> {
        let register = self.register.read().await;
        Ok(register.assets.clone())
    }

    async fn find_by_id(&self, id: AssetId) -> AssetStoreResult<Option<Asset>> {
        let register = self.register.read().await;
        Ok(register.assets.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, draft: AssetDraft) -> AssetStoreResult<Asset> {
        let mut register = self.register.write().await;
        let id = register.allocate_id()?;
        let asset = Asset::from_draft(id, draft);
        register.assets.push(asset.clone());
        Ok(asset)
    }

    async fn replace(&self, id: AssetId, draft: AssetDraft) -> AssetStoreResult<Asset> {
        let mut register = self.register.write().await;
        let index = register.position(id)?;
        let asset = &mut register.assets[index];
        asset.apply(draft);
        Ok(asset.clone())
    }

    async fn remove(&self, id: AssetId) -> AssetStoreResult<()> {
        let mut register = self.register.write().await;
        let index = register.position(id)?;
        register.assets.remove(index);
        Ok(())
    }

    async fn count(&self) -> AssetStoreResult<u64> {
        let register = self.register.read().await;
        Ok(register.assets.len() as u64)
    }
}
