//! Dashboard repository for aggregate queries.
//!
//! Each query fetches only the date window it reports on.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};
use tally_core::calendar;
use tally_core::dashboard::{CategoryTotal, DashboardService, ExpenseSummary, MonthlyTotal};
use tally_core::expense::ExpenseFilter;
use tally_shared::AppError;

use crate::repositories::expense::fetch_expenses;

/// Error types for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum DashboardRepoError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<DashboardRepoError> for AppError {
    fn from(err: DashboardRepoError) -> Self {
        match err {
            DashboardRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Dashboard repository for summary, monthly, and category figures.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Headline figures relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn summary(&self, today: NaiveDate) -> Result<ExpenseSummary, DashboardRepoError> {
        let window = calendar::previous_month_window(today)
            .union(&calendar::month_window(today))
            .union(&calendar::year_to_date(today));

        let expenses = fetch_expenses(&self.db, &ExpenseFilter::within(window), None).await?;
        Ok(DashboardService::summary(&expenses, today))
    }

    /// Twelve monthly totals for the year of `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn monthly_totals(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<MonthlyTotal>, DashboardRepoError> {
        let window = calendar::year_window(today);
        let expenses = fetch_expenses(&self.db, &ExpenseFilter::within(window), None).await?;
        Ok(DashboardService::monthly_totals(&expenses, today))
    }

    /// Per-category totals for the month of `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn category_totals(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<CategoryTotal>, DashboardRepoError> {
        let window = calendar::month_window(today);
        let expenses = fetch_expenses(&self.db, &ExpenseFilter::within(window), None).await?;
        Ok(DashboardService::category_totals(&expenses, today))
    }
}
