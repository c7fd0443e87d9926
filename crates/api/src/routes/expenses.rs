//! Expense routes: listing, writes, recent items, and export.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tally_core::Category;
use tally_core::expense::{CreateExpenseInput, Expense, ExpenseFilter};
use tally_core::export::{ExportFormat, ExportService};
use tally_db::ExpenseRepository;
use tally_shared::{AppError, ExpenseId};
use tracing::info;

use crate::AppState;
use crate::response::{error_response, validation_error, write_outcome};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/recent", get(recent_expenses))
        .route("/expenses/export", get(export_expenses))
        .route("/expenses/{expense_id}", delete(delete_expense))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Filter parameters shared by listing and export.
///
/// Empty values are treated as absent, so blank form fields do not filter.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseQuery {
    /// Earliest date, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Latest date, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Category id, or `all`.
    pub category: Option<String>,
    /// Smallest amount.
    pub min_amount: Option<String>,
    /// Largest amount.
    pub max_amount: Option<String>,
}

impl ExpenseQuery {
    /// Parses the raw parameters into a filter.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first malformed parameter.
    pub fn into_filter(self) -> Result<ExpenseFilter, String> {
        Ok(ExpenseFilter {
            start_date: present(self.start_date)
                .map(|raw| parse_date("start_date", &raw))
                .transpose()?,
            end_date: present(self.end_date)
                .map(|raw| parse_date("end_date", &raw))
                .transpose()?,
            category: Category::parse_scope(self.category.as_deref())?,
            min_amount: present(self.min_amount)
                .map(|raw| parse_amount("min_amount", &raw))
                .transpose()?,
            max_amount: present(self.max_amount)
                .map(|raw| parse_amount("max_amount", &raw))
                .transpose()?,
        })
    }
}

/// Query parameters for recent expenses.
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    /// Number of items; clamped to the configured maximum.
    pub limit: Option<String>,
}

/// Query parameters for export.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// `csv` (default) or `json`.
    pub format: Option<String>,
    /// Optional filter.
    #[serde(flatten)]
    pub filter: ExpenseQuery,
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Amount, as a number or decimal string.
    pub amount: Decimal,
    /// Category id.
    pub category: String,
    /// Optional note.
    pub description: Option<String>,
    /// Effective date, `YYYY-MM-DD`.
    pub date: String,
}

/// Response for an expense.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: String,
    /// Amount as a decimal string.
    pub amount: String,
    /// Category id.
    pub category: &'static str,
    /// Category display name.
    pub category_name: &'static str,
    /// Optional note.
    pub description: Option<String>,
    /// Effective date.
    pub date: String,
    /// Created at timestamp.
    pub created_at: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            amount: expense.amount.normalize().to_string(),
            category: expense.category.id(),
            category_name: expense.category.display_name(),
            description: expense.description,
            date: expense.date.format("%Y-%m-%d").to_string(),
            created_at: expense.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a `YYYY-MM-DD` date.
pub(crate) fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid {field}: expected YYYY-MM-DD, got {raw:?}"))
}

fn parse_amount(field: &str, raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw.trim()).map_err(|_| format!("Invalid {field}: {raw:?}"))
}

fn list_response(expenses: Vec<Expense>) -> Response {
    let response: Vec<ExpenseResponse> = expenses.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(json!({ "expenses": response }))).into_response()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/expenses` - List expenses matching the query filter, newest first.
async fn list_expenses(State(state): State<AppState>, Query(query): Query<ExpenseQuery>) -> Response {
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(message) => return validation_error("Invalid expense filter", message),
    };

    let repo = ExpenseRepository::new((*state.db).clone());

    match repo.list(&filter).await {
        Ok(expenses) => list_response(expenses),
        Err(e) => error_response("Failed to list expenses", &e.into()),
    }
}

/// GET `/expenses/recent` - The newest few expenses.
async fn recent_expenses(State(state): State<AppState>, Query(query): Query<RecentQuery>) -> Response {
    let requested = match present(query.limit).map(|raw| raw.parse::<u64>()).transpose() {
        Ok(limit) => limit,
        Err(_) => return validation_error("Invalid limit", "limit must be a positive integer"),
    };
    let limit = state.export.clamp_recent_limit(requested);

    let repo = ExpenseRepository::new((*state.db).clone());

    match repo.recent(limit).await {
        Ok(expenses) => list_response(expenses),
        Err(e) => error_response("Failed to list recent expenses", &e.into()),
    }
}

/// POST `/expenses` - Record an expense.
async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return validation_error("Invalid expense body", rejection.body_text()),
    };

    let category = match Category::from_str(&payload.category) {
        Ok(category) => category,
        Err(message) => return validation_error("Invalid expense category", message),
    };
    let date = match parse_date("date", &payload.date) {
        Ok(date) => date,
        Err(message) => return validation_error("Invalid expense date", message),
    };

    let repo = ExpenseRepository::new((*state.db).clone());
    let input = CreateExpenseInput {
        amount: payload.amount,
        category,
        description: payload.description,
        date,
    };

    match repo.create(input).await {
        Ok(expense) => {
            info!(
                expense_id = %expense.id,
                category = %expense.category,
                amount = %expense.amount,
                "Expense recorded"
            );
            write_outcome(StatusCode::CREATED, expense.id)
        }
        Err(e) => error_response("Failed to create expense", &e.into()),
    }
}

/// DELETE `/expenses/{expense_id}` - Delete an expense.
///
/// Deleting an unknown ID succeeds with `deleted: false`.
async fn delete_expense(State(state): State<AppState>, Path(expense_id): Path<String>) -> Response {
    let Ok(id) = ExpenseId::from_str(&expense_id) else {
        return validation_error("Invalid expense id", format!("Invalid expense id: {expense_id:?}"));
    };

    let repo = ExpenseRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(deleted) => {
            info!(expense_id = %id, deleted, "Expense delete");
            (
                StatusCode::OK,
                Json(json!({ "success": true, "id": id, "deleted": deleted })),
            )
                .into_response()
        }
        Err(e) => error_response("Failed to delete expense", &e.into()),
    }
}

/// GET `/expenses/export` - Download expenses as CSV or JSON.
async fn export_expenses(State(state): State<AppState>, Query(query): Query<ExportQuery>) -> Response {
    let format = match ExportFormat::parse_optional(present(query.format).as_deref()) {
        Ok(format) => format,
        Err(e) => return validation_error("Invalid export format", e.to_string()),
    };
    let filter = match query.filter.into_filter() {
        Ok(filter) => filter,
        Err(message) => return validation_error("Invalid export filter", message),
    };

    let repo = ExpenseRepository::new((*state.db).clone());
    let expenses = match repo.list(&filter).await {
        Ok(expenses) => expenses,
        Err(e) => return error_response("Failed to load expenses for export", &e.into()),
    };

    let body = match ExportService::render(format, &expenses) {
        Ok(body) => body,
        Err(e) => {
            return error_response("Failed to render export", &AppError::Internal(e.to_string()));
        }
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        format.file_name(Utc::now().date_naive())
    );
    info!(%format, count = expenses.len(), "Expenses exported");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
