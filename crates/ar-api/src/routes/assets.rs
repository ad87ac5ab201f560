//! Asset endpoints.
//!
//! Form posts from the inventory page land here and answer with a redirect
//! back to `/`. Lookups answer with JSON for the edit form.

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Form, Json, Router,
};

use ar_core::commands;
use ar_core::{AssetForm, AssetId};

use crate::dto::AssetResponse;
use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

/// Creates asset routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assets", post(create_asset))
        .route("/assets/:id", get(get_asset))
        .route("/assets/:id/update", post(update_asset))
        .route("/assets/:id/delete", post(delete_asset))
}

/// Parses an identifier taken from the request path.
pub(crate) fn parse_asset_id(raw: &str) -> Result<AssetId, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid asset id '{}'", raw)))
}

/// Create an asset from the add form.
async fn create_asset(
    State(state): State<AppState>,
    Form(form): Form<AssetForm>,
) -> Result<Redirect, ApiError> {
    commands::create_asset(state.assets.as_ref(), form).await?;
    Ok(Redirect::to("/"))
}

/// Get a single asset.
#[utoipa::path(
    get,
    path = "/assets/{id}",
    params(("id" = u64, Path, description = "Asset identifier")),
    responses(
        (status = 200, description = "Asset found", body = AssetResponse),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    ),
    tag = "Assets"
)]
pub(crate) async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssetResponse>, ApiError> {
    let id = parse_asset_id(&id)?;
    let asset = commands::find_asset(state.assets.as_ref(), id).await?;
    Ok(Json(asset.into()))
}

/// Replace an asset's fields from the edit form.
async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<AssetForm>,
) -> Result<Redirect, ApiError> {
    let id = parse_asset_id(&id)?;
    commands::update_asset(state.assets.as_ref(), id, form).await?;
    Ok(Redirect::to("/"))
}

/// Delete an asset.
async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    let id = parse_asset_id(&id)?;
    commands::delete_asset(state.assets.as_ref(), id).await?;
    Ok(Redirect::to("/"))
}
