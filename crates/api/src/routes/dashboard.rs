//! Dashboard routes: summary, monthly totals, and category breakdown.
//!
//! All figures are relative to the current UTC date.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tally_db::DashboardRepository;

use crate::AppState;
use crate::response::error_response;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses/summary", get(get_summary))
        .route("/expenses/monthly", get(get_monthly_totals))
        .route("/expenses/categories", get(get_category_totals))
}

/// GET `/expenses/summary` - Headline figures for this month and year.
async fn get_summary(State(state): State<AppState>) -> Response {
    let repo = DashboardRepository::new((*state.db).clone());

    match repo.summary(Utc::now().date_naive()).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response("Failed to get expense summary", &e.into()),
    }
}

/// GET `/expenses/monthly` - Twelve monthly totals for this year.
async fn get_monthly_totals(State(state): State<AppState>) -> Response {
    let repo = DashboardRepository::new((*state.db).clone());

    match repo.monthly_totals(Utc::now().date_naive()).await {
        Ok(months) => (StatusCode::OK, Json(months)).into_response(),
        Err(e) => error_response("Failed to get monthly totals", &e.into()),
    }
}

/// GET `/expenses/categories` - This month's spending per category.
async fn get_category_totals(State(state): State<AppState>) -> Response {
    let repo = DashboardRepository::new((*state.db).clone());

    match repo.category_totals(Utc::now().date_naive()).await {
        Ok(totals) => (StatusCode::OK, Json(totals)).into_response(),
        Err(e) => error_response("Failed to get category totals", &e.into()),
    }
}
