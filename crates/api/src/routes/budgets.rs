//! Budget management routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tally_core::Category;
use tally_core::budget::{Budget, BudgetProgress, BudgetStatus, CreateBudgetInput, UpdateBudgetInput};
use tally_db::BudgetRepository;
use tally_db::repositories::BudgetWithProgress;
use tally_shared::{AppError, BudgetId};
use tracing::info;

use crate::AppState;
use crate::response::{error_response, validation_error, write_outcome};
use crate::routes::expenses::parse_date;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/{budget_id}", get(get_budget).put(update_budget))
        .route("/budgets/{budget_id}/progress", get(get_budget_progress))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a budget.
#[derive(Debug, Deserialize)]
pub struct CreateBudgetRequest {
    /// Budget name.
    pub name: String,
    /// Spending limit.
    pub amount: Decimal,
    /// Category id; `all` or null covers every category.
    pub category: Option<String>,
    /// First day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: String,
}

/// Request body for updating a budget. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    /// New name.
    pub name: Option<String>,
    /// New limit.
    pub amount: Option<Decimal>,
    /// New scope. An explicit null (or `all`) widens to every category.
    #[serde(default, deserialize_with = "present_or_null")]
    pub category: Option<Option<String>>,
    /// New first day.
    pub start_date: Option<String>,
    /// New last day.
    pub end_date: Option<String>,
}

/// Distinguishes an explicit null from an absent field.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Response for a budget.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    /// Budget ID.
    pub id: String,
    /// Budget name.
    pub name: String,
    /// Spending limit.
    pub amount: String,
    /// Category id, or `null` for every category.
    pub category: Option<&'static str>,
    /// First day.
    pub start_date: String,
    /// Last day.
    pub end_date: String,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
}

impl From<Budget> for BudgetResponse {
    fn from(budget: Budget) -> Self {
        Self {
            id: budget.id.to_string(),
            name: budget.name,
            amount: budget.amount.normalize().to_string(),
            category: budget.category.map(Category::id),
            start_date: budget.start_date.format("%Y-%m-%d").to_string(),
            end_date: budget.end_date.format("%Y-%m-%d").to_string(),
            created_at: budget.created_at.to_rfc3339(),
            updated_at: budget.updated_at.to_rfc3339(),
        }
    }
}

/// Response for budget progress.
#[derive(Debug, Serialize)]
pub struct BudgetProgressResponse {
    /// The budget, or `null` when the ID is unknown.
    pub budget: Option<BudgetResponse>,
    /// Amount spent in range.
    pub spent: String,
    /// Amount left, never negative.
    pub remaining: String,
    /// Share of the limit used, clamped to 0..=100.
    pub percentage: String,
    /// `under_budget`, `at_limit`, or `over_budget`.
    pub status: BudgetStatus,
}

impl From<BudgetWithProgress> for BudgetProgressResponse {
    fn from(result: BudgetWithProgress) -> Self {
        let BudgetProgress {
            spent,
            remaining,
            percentage,
            status,
        } = result.progress;

        Self {
            budget: result.budget.map(Into::into),
            spent: spent.to_string(),
            remaining: remaining.to_string(),
            percentage: percentage.to_string(),
            status,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_budget_id(raw: &str) -> Result<BudgetId, Response> {
    BudgetId::from_str(raw).map_err(|_| {
        validation_error("Invalid budget id", format!("Invalid budget id: {raw:?}"))
    })
}

fn parse_optional_date(field: &str, raw: Option<String>) -> Result<Option<chrono::NaiveDate>, String> {
    raw.map(|value| parse_date(field, &value)).transpose()
}

impl CreateBudgetRequest {
    fn into_input(self) -> Result<CreateBudgetInput, String> {
        Ok(CreateBudgetInput {
            category: Category::parse_scope(self.category.as_deref())?,
            start_date: parse_date("start_date", &self.start_date)?,
            end_date: parse_date("end_date", &self.end_date)?,
            name: self.name,
            amount: self.amount,
        })
    }
}

impl UpdateBudgetRequest {
    fn into_input(self) -> Result<UpdateBudgetInput, String> {
        Ok(UpdateBudgetInput {
            category: self
                .category
                .map(|scope| Category::parse_scope(scope.as_deref()))
                .transpose()?,
            start_date: parse_optional_date("start_date", self.start_date)?,
            end_date: parse_optional_date("end_date", self.end_date)?,
            name: self.name,
            amount: self.amount,
        })
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/budgets` - List budgets, latest end date first.
async fn list_budgets(State(state): State<AppState>) -> Response {
    let repo = BudgetRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(budgets) => {
            let response: Vec<BudgetResponse> = budgets.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(serde_json::json!({ "budgets": response }))).into_response()
        }
        Err(e) => error_response("Failed to list budgets", &e.into()),
    }
}

/// POST `/budgets` - Create a budget.
async fn create_budget(
    State(state): State<AppState>,
    payload: Result<Json<CreateBudgetRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return validation_error("Invalid budget body", rejection.body_text()),
    };
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(message) => return validation_error("Invalid budget", message),
    };

    let repo = BudgetRepository::new((*state.db).clone());

    match repo.create(input).await {
        Ok(budget) => {
            info!(budget_id = %budget.id, name = %budget.name, "Budget created");
            write_outcome(StatusCode::CREATED, budget.id)
        }
        Err(e) => error_response("Failed to create budget", &e.into()),
    }
}

/// GET `/budgets/{budget_id}` - Get a budget.
async fn get_budget(State(state): State<AppState>, Path(budget_id): Path<String>) -> Response {
    let id = match parse_budget_id(&budget_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let repo = BudgetRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(budget)) => (StatusCode::OK, Json(BudgetResponse::from(budget))).into_response(),
        Ok(None) => error_response(
            "Budget lookup",
            &AppError::NotFound(format!("budget {id}")),
        ),
        Err(e) => error_response("Failed to get budget", &e.into()),
    }
}

/// PUT `/budgets/{budget_id}` - Partially update a budget.
async fn update_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<String>,
    payload: Result<Json<UpdateBudgetRequest>, JsonRejection>,
) -> Response {
    let id = match parse_budget_id(&budget_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return validation_error("Invalid budget body", rejection.body_text()),
    };
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(message) => return validation_error("Invalid budget update", message),
    };

    let repo = BudgetRepository::new((*state.db).clone());

    match repo.update(id, input).await {
        Ok(budget) => {
            info!(budget_id = %budget.id, "Budget updated");
            write_outcome(StatusCode::OK, budget.id)
        }
        Err(e) => error_response("Failed to update budget", &e.into()),
    }
}

/// GET `/budgets/{budget_id}/progress` - Spending against a budget.
///
/// An unknown ID returns a zero result with `budget: null`.
async fn get_budget_progress(State(state): State<AppState>, Path(budget_id): Path<String>) -> Response {
    let id = match parse_budget_id(&budget_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let repo = BudgetRepository::new((*state.db).clone());

    match repo.progress(id).await {
        Ok(result) => (StatusCode::OK, Json(BudgetProgressResponse::from(result))).into_response(),
        Err(e) => error_response("Failed to get budget progress", &e.into()),
    }
}
