//! Askama template definitions for the web pages.

use askama::Template;

// ============================================
// Inventory
// ============================================

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub company_name: String,
    pub search: String,
    pub columns: Vec<SortColumn>,
    pub rows: Vec<AssetRow>,
    /// Rows shown after the search filter.
    pub shown_count: usize,
    pub total_assets: usize,
    pub total_value: String,
}

/// A sortable column header.
#[derive(Clone)]
pub struct SortColumn {
    pub label: String,
    pub href: String,
    /// Arrow for the active column, empty otherwise.
    pub indicator: String,
    pub active: bool,
}

#[derive(Clone)]
pub struct AssetRow {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub value: String,
    pub status: String,
    pub status_class: String,
    pub location: String,
}

// ============================================
// Label
// ============================================

#[derive(Template)]
#[template(path = "label.html")]
pub struct LabelTemplate {
    pub company_name: String,
    pub asset: AssetRow,
}
