//! Server-rendered pages: the inventory list and printable labels.

mod templates;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;

use ar_core::commands;
use ar_core::{run_query, Asset, AssetQuery, SortKey, SortOrder};

use crate::error::ApiError;
use crate::routes::assets::parse_asset_id;
use crate::state::AppState;
use templates::*;

/// Creates the web page router.
pub fn create_web_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/assets/:id/label", get(asset_label))
        .with_state(state)
}

/// Query string of the inventory page.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    search: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

/// Inventory page with search, sorting and totals.
async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let query = AssetQuery::from_params(
        params.search.as_deref(),
        params.sort.as_deref(),
        params.order.as_deref(),
    );

    let all = state.assets.all().await?;
    let view = run_query(&all, &query);
    debug!(
        shown = view.assets.len(),
        total = view.total_assets,
        sort = ?query.sort,
        "Rendering inventory"
    );

    let template = IndexTemplate {
        company_name: state.settings.company_name().await,
        search: query.search.clone().unwrap_or_default(),
        columns: sort_columns(&query)?,
        shown_count: view.assets.len(),
        rows: view.assets.iter().map(asset_row).collect(),
        total_assets: view.total_assets,
        total_value: format_money(view.total_value),
    };

    Ok(HtmlTemplate(template))
}

/// Printable label for one asset. Unknown ids go back to the list.
async fn asset_label(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(id) = parse_asset_id(&id) else {
        return Ok(Redirect::to("/").into_response());
    };

    match commands::find_asset(state.assets.as_ref(), id).await {
        Ok(asset) => {
            let template = LabelTemplate {
                company_name: state.settings.company_name().await,
                asset: asset_row(&asset),
            };
            Ok(HtmlTemplate(template).into_response())
        }
        Err(commands::CommandError::NotFound(_)) => Ok(Redirect::to("/").into_response()),
        Err(err) => Err(err.into()),
    }
}

/// Header links for every sortable column.
///
/// Clicking the active column flips its direction. Any other column starts
/// ascending. The current search term is carried along.
fn sort_columns(query: &AssetQuery) -> Result<Vec<SortColumn>, ApiError> {
    SortKey::ALL
        .iter()
        .map(|&key| {
            let active = query.sort == Some(key);
            let next_order = if active {
                query.order.reversed()
            } else {
                SortOrder::Ascending
            };

            let mut pairs = vec![("sort", key.as_str()), ("order", next_order.as_str())];
            if let Some(search) = query.search.as_deref() {
                pairs.push(("search", search));
            }
            let qs = serde_urlencoded::to_string(&pairs)
                .map_err(|e| ApiError::Internal(format!("Failed to encode sort link: {}", e)))?;

            let indicator = match (active, query.order) {
                (false, _) => "",
                (true, SortOrder::Ascending) => "▲",
                (true, SortOrder::Descending) => "▼",
            };

            Ok(SortColumn {
                label: key.label().to_string(),
                href: format!("/?{}", qs),
                indicator: indicator.to_string(),
                active,
            })
        })
        .collect()
}

fn asset_row(asset: &Asset) -> AssetRow {
    AssetRow {
        id: asset.id,
        name: asset.name.clone(),
        category: asset.category.clone(),
        serial_number: asset.serial_number.clone(),
        purchase_date: asset.purchase_date.clone(),
        value: format_money(asset.value),
        status: asset.status.clone(),
        status_class: status_class(&asset.status),
        location: asset.location.clone(),
    }
}

fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

/// CSS modifier for a status badge, e.g. "Under Maintenance" -> "under-maintenance".
fn status_class(status: &str) -> String {
    status
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Wrapper for rendering Askama templates as HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: askama::Template,
{
    fn into_response(self) -> Response {
        use axum::response::Html;

        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template rendering error: {}", err);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", err),
                )
                    .into_response()
            }
        }
    }
}
