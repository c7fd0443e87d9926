//! Budget data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::BudgetId;

use crate::calendar::DateRange;
use crate::category::Category;
use crate::expense::ExpenseFilter;

/// A named spending cap over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Spending limit.
    pub amount: Decimal,
    /// Category scope. `None` covers every category.
    pub category: Option<Category>,
    /// First day counted.
    pub start_date: NaiveDate,
    /// Last day counted.
    pub end_date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// The budget's inclusive date range.
    #[must_use]
    pub const fn period(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// The expense filter selecting what counts against this budget.
    #[must_use]
    pub fn expense_filter(&self) -> ExpenseFilter {
        ExpenseFilter::within(self.period()).in_category(self.category)
    }
}

/// Input for creating a budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBudgetInput {
    /// Budget name.
    pub name: String,
    /// Spending limit.
    pub amount: Decimal,
    /// Category scope.
    pub category: Option<Category>,
    /// First day counted.
    pub start_date: NaiveDate,
    /// Last day counted.
    pub end_date: NaiveDate,
}

/// Partial update for a budget. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBudgetInput {
    /// New name.
    pub name: Option<String>,
    /// New limit.
    pub amount: Option<Decimal>,
    /// New scope; `Some(None)` widens to every category.
    pub category: Option<Option<Category>>,
    /// New first day.
    pub start_date: Option<NaiveDate>,
    /// New last day.
    pub end_date: Option<NaiveDate>,
}

/// Where spending stands against the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spent less than the limit.
    UnderBudget,
    /// Spent exactly the limit.
    AtLimit,
    /// Spent more than the limit.
    OverBudget,
}

/// Derived spending progress for one budget.
///
/// `percentage` is clamped to `0..=100`, so it cannot tell "at limit" from
/// "over limit"; use `status` or compare `spent` with the budget amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetProgress {
    /// Sum of matching expenses.
    pub spent: Decimal,
    /// `max(0, amount - spent)`.
    pub remaining: Decimal,
    /// `min(100, 100 * spent / amount)`, two decimal places.
    pub percentage: Decimal,
    /// Under, at, or over the limit.
    pub status: BudgetStatus,
}

impl BudgetProgress {
    /// Progress reported for a budget that does not exist.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            spent: Decimal::ZERO,
            remaining: Decimal::ZERO,
            percentage: Decimal::ZERO,
            status: BudgetStatus::UnderBudget,
        }
    }

    /// Returns true once spending passes the limit.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.status == BudgetStatus::OverBudget
    }
}
