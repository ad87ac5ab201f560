//! # ar-api
//!
//! HTTP server for Asset Register.
//!
//! Serves the rendered inventory and label pages, the form endpoints that
//! change the register, and a small JSON API for lookups and settings.

pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod web;

pub use error::ApiError;
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
