//! Asset data model for the register.
//!
//! Assets are physical items (laptops, furniture, printers) tracked with a
//! monetary value and a physical location.

use serde::{Deserialize, Serialize};

/// Store-assigned asset identifier.
pub type AssetId = u64;

/// Represents a tracked physical asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier, assigned by the store and never changed.
    pub id: AssetId,
    /// Human-readable name.
    pub name: String,
    /// Free-text classification (e.g. "Electronics").
    pub category: String,
    /// Manufacturer serial number. Not checked for uniqueness.
    pub serial_number: String,
    /// Purchase date as an ISO `YYYY-MM-DD` string.
    pub purchase_date: String,
    /// Monetary value. Always finite.
    pub value: f64,
    /// Lifecycle label (e.g. "Active", "Under Maintenance").
    pub status: String,
    /// Physical location.
    pub location: String,
}

impl Asset {
    /// Builds a stored asset from an identifier and a draft.
    pub fn from_draft(id: AssetId, draft: AssetDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            serial_number: draft.serial_number,
            purchase_date: draft.purchase_date,
            value: draft.value,
            status: draft.status,
            location: draft.location,
        }
    }

    /// Overwrites every field except `id` with the draft's values.
    pub fn apply(&mut self, draft: AssetDraft) {
        let id = self.id;
        *self = Asset::from_draft(id, draft);
    }

    /// Returns the fields that take part in free-text search.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.category,
            &self.serial_number,
            &self.status,
            &self.location,
        ]
    }
}

/// Typed asset fields without an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDraft {
    pub name: String,
    pub category: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub value: f64,
    pub status: String,
    pub location: String,
}

/// Raw asset fields as submitted by the create and edit forms.
///
/// Every field is text, including `value`, and missing fields decode as
/// empty strings. Use [`crate::commands::parse_asset_form`] to turn a form
/// into an [`AssetDraft`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetForm {
    pub name: String,
    pub category: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub value: String,
    pub status: String,
    pub location: String,
}
