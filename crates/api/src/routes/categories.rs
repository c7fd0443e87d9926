//! Category listing.

use axum::{Json, Router, routing::get};
use tally_core::{Category, CategoryInfo};

use crate::AppState;

/// GET `/categories` - The fixed category list in display order.
async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(Category::catalog())
}

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}
