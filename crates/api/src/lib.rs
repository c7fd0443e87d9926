//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for expenses, budgets, and dashboard figures
//! - Request parsing that turns bad input into validation errors
//! - Uniform JSON error and write-outcome bodies

pub mod response;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tally_shared::ExportConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Limits for recent-expense listings.
    pub export: ExportConfig,
}

impl AppState {
    /// Creates state around an open connection.
    #[must_use]
    pub fn new(db: DatabaseConnection, export: ExportConfig) -> Self {
        Self {
            db: Arc::new(db),
            export,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
