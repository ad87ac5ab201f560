//! Commands that change the register.
//!
//! Each command validates its raw input, applies it to a store and logs the
//! outcome. A missing identifier is reported as [`CommandError::NotFound`]
//! rather than ignored.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::asset_store::{AssetStore, AssetStoreError};
use crate::models::{Asset, AssetDraft, AssetForm, AssetId};
use crate::settings::SettingsStore;

/// Errors returned by register commands.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A submitted field could not be converted to its typed form.
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// No asset carries the requested identifier.
    #[error("Asset {0} not found")]
    NotFound(AssetId),

    /// The underlying store failed.
    #[error(transparent)]
    Store(AssetStoreError),
}

impl From<AssetStoreError> for CommandError {
    fn from(err: AssetStoreError) -> Self {
        match err {
            AssetStoreError::NotFound(id) => CommandError::NotFound(id),
            other => CommandError::Store(other),
        }
    }
}

impl CommandError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        CommandError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for register commands.
pub type CommandResult<T> = Result<T, CommandError>;

/// Parses a monetary value.
///
/// Surrounding whitespace is ignored. Text that is not a number, `NaN`,
/// infinities and negative amounts are rejected.
pub fn parse_value(raw: &str) -> CommandResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommandError::invalid("value", "a value is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CommandError::invalid("value", format!("'{}' is not a number", raw)))?;
    if !value.is_finite() {
        return Err(CommandError::invalid(
            "value",
            format!("'{}' is not a finite number", raw),
        ));
    }
    if value < 0.0 {
        return Err(CommandError::invalid(
            "value",
            format!("'{}' is negative", raw.trim()),
        ));
    }
    Ok(value)
}

/// Converts a raw form submission into typed asset fields.
pub fn parse_asset_form(form: AssetForm) -> CommandResult<AssetDraft> {
    let value = parse_value(&form.value)?;
    Ok(AssetDraft {
        name: form.name,
        category: form.category,
        serial_number: form.serial_number,
        purchase_date: form.purchase_date,
        value,
        status: form.status,
        location: form.location,
    })
}

/// Creates an asset with a freshly allocated identifier.
pub async fn create_asset(store: &dyn AssetStore, form: AssetForm) -> CommandResult<Asset> {
    let draft = parse_asset_form(form)?;
    let asset = store.insert(draft).await?;
    info!(asset_id = asset.id, name = %asset.name, "Asset created");
    Ok(asset)
}

/// Replaces every field of an existing asset except its identifier.
pub async fn update_asset(
    store: &dyn AssetStore,
    id: AssetId,
    form: AssetForm,
) -> CommandResult<Asset> {
    let draft = parse_asset_form(form)?;
    let asset = store.replace(id, draft).await.map_err(|err| {
        if let AssetStoreError::NotFound(_) = err {
            warn!(asset_id = id, "Update requested for unknown asset");
        }
        CommandError::from(err)
    })?;
    info!(asset_id = id, "Asset updated");
    Ok(asset)
}

/// Removes an asset.
pub async fn delete_asset(store: &dyn AssetStore, id: AssetId) -> CommandResult<()> {
    store.remove(id).await.map_err(|err| {
        if let AssetStoreError::NotFound(_) = err {
            warn!(asset_id = id, "Delete requested for unknown asset");
        }
        CommandError::from(err)
    })?;
    info!(asset_id = id, "Asset deleted");
    Ok(())
}

/// Looks up a single asset.
pub async fn find_asset(store: &dyn AssetStore, id: AssetId) -> CommandResult<Asset> {
    store.find_by_id(id).await?.ok_or(CommandError::NotFound(id))
}

/// Outcome of a company rename.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRename {
    /// Always true. A blank candidate is not an error.
    pub success: bool,
    /// Company name after the command ran.
    pub company_name: String,
}

/// Renames the company.
///
/// The candidate is trimmed. A blank result leaves the current name in place.
pub async fn rename_company(settings: &dyn SettingsStore, candidate: &str) -> CompanyRename {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return CompanyRename {
            success: true,
            company_name: settings.company_name().await,
        };
    }

    settings.set_company_name(trimmed.to_string()).await;
    info!(company_name = %trimmed, "Company renamed");
    CompanyRename {
        success: true,
        company_name: trimmed.to_string(),
    }
}
