//! API routes.

pub mod assets;
pub mod health;
pub mod settings;

use crate::state::AppState;
use axum::Router;

/// Creates the main API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(assets::routes())
        .merge(settings::routes())
        .merge(health::routes())
        .with_state(state)
}
