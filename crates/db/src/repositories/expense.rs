//! Expense repository for expense database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tally_core::expense::{CreateExpenseInput, Expense, ExpenseError, ExpenseFilter, ExpenseService};
use tally_shared::{AppError, ExpenseId};
use tracing::debug;

use crate::entities::{expenses, sea_orm_active_enums::ExpenseCategory};

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseRepoError {
    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ExpenseError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ExpenseRepoError> for AppError {
    fn from(err: ExpenseRepoError) -> Self {
        match err {
            ExpenseRepoError::Validation(e) => Self::Validation(e.to_string()),
            ExpenseRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<expenses::Model> for Expense {
    fn from(model: expenses::Model) -> Self {
        Self {
            id: ExpenseId::from_uuid(model.id),
            amount: model.amount,
            category: model.category.into(),
            description: model.description,
            date: model.expense_date,
            created_at: model.created_at,
        }
    }
}

/// Translates a filter into a store condition.
///
/// Must select exactly what [`ExpenseFilter::matches`] selects.
pub(crate) fn filter_condition(filter: &ExpenseFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(start) = filter.start_date {
        condition = condition.add(expenses::Column::ExpenseDate.gte(start));
    }
    if let Some(end) = filter.end_date {
        condition = condition.add(expenses::Column::ExpenseDate.lte(end));
    }
    if let Some(category) = filter.category {
        condition = condition.add(expenses::Column::Category.eq(ExpenseCategory::from(category)));
    }
    if let Some(min) = filter.min_amount {
        condition = condition.add(expenses::Column::Amount.gte(min));
    }
    if let Some(max) = filter.max_amount {
        condition = condition.add(expenses::Column::Amount.lte(max));
    }

    condition
}

/// Fetches matching expenses, newest first.
pub(crate) async fn fetch_expenses(
    db: &DatabaseConnection,
    filter: &ExpenseFilter,
    limit: Option<u64>,
) -> Result<Vec<Expense>, DbErr> {
    let rows = expenses::Entity::find()
        .filter(filter_condition(filter))
        .order_by_desc(expenses::Column::ExpenseDate)
        .order_by_desc(expenses::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(Expense::from).collect())
}

/// Expense repository for list, create, and delete operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists expenses matching `filter`, ordered by date then creation time,
    /// both descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ExpenseRepoError> {
        Ok(fetch_expenses(&self.db, filter, None).await?)
    }

    /// Returns the `limit` newest expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn recent(&self, limit: u64) -> Result<Vec<Expense>, ExpenseRepoError> {
        Ok(fetch_expenses(&self.db, &ExpenseFilter::all(), Some(limit)).await?)
    }

    /// Validates and stores a new expense.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the insert fails.
    pub async fn create(&self, input: CreateExpenseInput) -> Result<Expense, ExpenseRepoError> {
        let input = ExpenseService::validate(input)?;
        let id = ExpenseId::new();

        let model = expenses::ActiveModel {
            id: Set(id.into_inner()),
            amount: Set(input.amount),
            category: Set(input.category.into()),
            description: Set(input.description),
            expense_date: Set(input.date),
            created_at: Set(Utc::now()),
        };

        let expense = Expense::from(model.insert(&self.db).await?);
        debug!(expense_id = %expense.id, amount = %expense.amount, "Expense created");
        Ok(expense)
    }

    /// Deletes an expense by ID.
    ///
    /// Returns `false` when no such expense existed; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete(&self, id: ExpenseId) -> Result<bool, ExpenseRepoError> {
        let result = expenses::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        let deleted = result.rows_affected > 0;
        debug!(expense_id = %id, deleted, "Expense delete");
        Ok(deleted)
    }

    /// Counts stored expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, ExpenseRepoError> {
        Ok(expenses::Entity::find().count(&self.db).await?)
    }
}
