//! Query pipeline for the asset list view.
//!
//! Filters the collection by a free-text search term, orders it by one
//! asset field and computes inventory totals. The pipeline works on a
//! borrowed slice and never mutates the store.

use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Asset;

/// Asset field the list view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Category,
    SerialNumber,
    PurchaseDate,
    Value,
    Status,
    Location,
}

impl SortKey {
    /// Every sort key, in column order.
    pub const ALL: [SortKey; 8] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Category,
        SortKey::SerialNumber,
        SortKey::PurchaseDate,
        SortKey::Value,
        SortKey::Status,
        SortKey::Location,
    ];

    /// Query-string name of the key (matches the asset's JSON field name).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::SerialNumber => "serialNumber",
            SortKey::PurchaseDate => "purchaseDate",
            SortKey::Value => "value",
            SortKey::Status => "status",
            SortKey::Location => "location",
        }
    }

    /// Column heading for the key.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "Name",
            SortKey::Category => "Category",
            SortKey::SerialNumber => "Serial Number",
            SortKey::PurchaseDate => "Purchase Date",
            SortKey::Value => "Value",
            SortKey::Status => "Status",
            SortKey::Location => "Location",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "serialNumber" | "serial_number" => Ok(SortKey::SerialNumber),
            "purchaseDate" | "purchase_date" => Ok(SortKey::PurchaseDate),
            "value" => Ok(SortKey::Value),
            "status" => Ok(SortKey::Status),
            "location" => Ok(SortKey::Location),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// Direction of the list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Query-string form (`asc` / `desc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Returns the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Parses a query-string value, falling back to ascending.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// Parameters of a list-view query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetQuery {
    /// Case-insensitive substring to search for. Empty means no filter.
    pub search: Option<String>,
    /// Field to order by. `None` keeps insertion order.
    pub sort: Option<SortKey>,
    /// Direction of the ordering.
    pub order: SortOrder,
}

impl AssetQuery {
    /// Builds a query from raw query-string values.
    ///
    /// The search term is used verbatim, surrounding whitespace included.
    /// Only an empty term disables the filter. Unknown sort keys leave the
    /// view unsorted and unknown directions fall back to ascending.
    pub fn from_params(search: Option<&str>, sort: Option<&str>, order: Option<&str>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()).map(String::from),
            sort: sort.and_then(|s| s.parse().ok()),
            order: order.map(SortOrder::parse_or_default).unwrap_or_default(),
        }
    }
}

/// Result of running a query over the register.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetView {
    /// Filtered and ordered assets.
    pub assets: Vec<Asset>,
    /// Number of assets in the whole register, ignoring the filter.
    pub total_assets: usize,
    /// Sum of `value` over the whole register, ignoring the filter.
    pub total_value: f64,
}

/// Runs the filter-then-sort pipeline.
///
/// The sort is stable: assets with equal keys keep their insertion order in
/// both directions.
pub fn run_query(all: &[Asset], query: &AssetQuery) -> AssetView {
    let mut assets: Vec<Asset> = match query.search.as_deref() {
        Some(term) if !term.is_empty() => {
            let needle = term.to_lowercase();
            all.iter()
                .filter(|a| matches_search(a, &needle))
                .cloned()
                .collect()
        }
        _ => all.to_vec(),
    };

    if let Some(key) = query.sort {
        assets.sort_by(|a, b| {
            let ordering = compare_by(a, b, key);
            match query.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    AssetView {
        assets,
        total_assets: all.len(),
        total_value: total_value(all),
    }
}

/// Checks whether any searchable field contains the lowercased needle.
pub fn matches_search(asset: &Asset, needle: &str) -> bool {
    asset
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Sum of all asset values.
pub fn total_value(assets: &[Asset]) -> f64 {
    assets.iter().map(|a| a.value).sum()
}

/// Three-way comparison of two assets on one field.
pub fn compare_by(a: &Asset, b: &Asset, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Value => a.value.total_cmp(&b.value),
        SortKey::PurchaseDate => {
            parse_purchase_date(&a.purchase_date).cmp(&parse_purchase_date(&b.purchase_date))
        }
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Category => compare_text(&a.category, &b.category),
        SortKey::SerialNumber => compare_text(&a.serial_number, &b.serial_number),
        SortKey::Status => compare_text(&a.status, &b.status),
        SortKey::Location => compare_text(&a.location, &b.location),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Parses a purchase date into a calendar date.
///
/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps. Anything else yields
/// `None`, which orders before every valid date.
pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
