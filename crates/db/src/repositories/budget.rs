//! Budget repository for budget database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use tally_core::budget::{
    Budget, BudgetError, BudgetProgress, BudgetService, CreateBudgetInput, UpdateBudgetInput,
};
use tally_shared::{AppError, BudgetId};
use tracing::debug;

use crate::entities::budgets;
use crate::repositories::expense::fetch_expenses;

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetRepoError {
    /// Budget not found.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] BudgetError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<BudgetRepoError> for AppError {
    fn from(err: BudgetRepoError) -> Self {
        match err {
            BudgetRepoError::NotFound(id) => Self::NotFound(format!("budget {id}")),
            BudgetRepoError::Validation(e) => Self::Validation(e.to_string()),
            BudgetRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<budgets::Model> for Budget {
    fn from(model: budgets::Model) -> Self {
        Self {
            id: BudgetId::from_uuid(model.id),
            name: model.name,
            amount: model.amount,
            category: model.category.map(Into::into),
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Progress for a budget lookup. `budget` is `None` when the ID is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetWithProgress {
    /// The budget, if it exists.
    pub budget: Option<Budget>,
    /// Spending against it; all zero for an unknown budget.
    pub progress: BudgetProgress,
}

/// Budget repository for CRUD and progress operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all budgets, latest end date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Budget>, BudgetRepoError> {
        let rows = budgets::Entity::find()
            .order_by_desc(budgets::Column::EndDate)
            .order_by_desc(budgets::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Budget::from).collect())
    }

    /// Gets a budget by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: BudgetId) -> Result<Option<Budget>, BudgetRepoError> {
        let row = budgets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?;

        Ok(row.map(Budget::from))
    }

    /// Validates and stores a new budget.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the insert fails.
    pub async fn create(&self, input: CreateBudgetInput) -> Result<Budget, BudgetRepoError> {
        let input = BudgetService::validate_create(input)?;
        let now = Utc::now();

        let model = budgets::ActiveModel {
            id: Set(BudgetId::new().into_inner()),
            name: Set(input.name),
            amount: Set(input.amount),
            category: Set(input.category.map(Into::into)),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let budget = Budget::from(model.insert(&self.db).await?);
        debug!(budget_id = %budget.id, name = %budget.name, "Budget created");
        Ok(budget)
    }

    /// Applies a partial update. The merged budget is re-validated.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Budget is not found
    /// - The merged budget fails validation
    /// - Database operation fails
    pub async fn update(
        &self,
        id: BudgetId,
        input: UpdateBudgetInput,
    ) -> Result<Budget, BudgetRepoError> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or(BudgetRepoError::NotFound(id))?;

        let merged = BudgetService::apply_update(&existing, input)?;

        let model = budgets::ActiveModel {
            id: Set(id.into_inner()),
            name: Set(merged.name),
            amount: Set(merged.amount),
            category: Set(merged.category.map(Into::into)),
            start_date: Set(merged.start_date),
            end_date: Set(merged.end_date),
            created_at: Set(merged.created_at),
            updated_at: Set(Utc::now()),
        };

        let budget = Budget::from(model.update(&self.db).await?);
        debug!(budget_id = %budget.id, "Budget updated");
        Ok(budget)
    }

    /// Computes spending progress for a budget.
    ///
    /// An unknown ID yields a zero result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn progress(&self, id: BudgetId) -> Result<BudgetWithProgress, BudgetRepoError> {
        let Some(budget) = self.find_by_id(id).await? else {
            return Ok(BudgetWithProgress {
                budget: None,
                progress: BudgetProgress::zero(),
            });
        };

        let expenses = fetch_expenses(&self.db, &budget.expense_filter(), None).await?;
        let progress = BudgetService::calculate_progress(&budget, &expenses);

        Ok(BudgetWithProgress {
            budget: Some(budget),
            progress,
        })
    }
}
