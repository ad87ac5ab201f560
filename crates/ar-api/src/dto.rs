//! Data Transfer Objects (DTOs) for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use ar_core::{Asset, AssetId, CompanyRename};

// ============================================================================
// Asset DTOs
// ============================================================================

/// A single asset as returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    #[schema(example = 10247)]
    pub id: AssetId,
    #[schema(example = "Dell Laptop")]
    pub name: String,
    pub category: String,
    pub serial_number: String,
    /// ISO date, `YYYY-MM-DD`.
    #[schema(example = "2023-01-15")]
    pub purchase_date: String,
    pub value: f64,
    pub status: String,
    pub location: String,
}

impl From<Asset> for AssetResponse {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name,
            category: asset.category,
            serial_number: asset.serial_number,
            purchase_date: asset.purchase_date,
            value: asset.value,
            status: asset.status,
            location: asset.location,
        }
    }
}

// ============================================================================
// Settings DTOs
// ============================================================================

/// Company settings after a read or rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettingsResponse {
    pub success: bool,
    #[schema(example = "Meraki Communications")]
    pub company_name: String,
}

impl From<CompanyRename> for CompanySettingsResponse {
    fn from(rename: CompanyRename) -> Self {
        Self {
            success: rename.success,
            company_name: rename.company_name,
        }
    }
}

// ============================================================================
// Health DTOs
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Number of assets currently in the register.
    pub asset_count: u64,
}
