//! Expense filtering.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Expense;
use crate::calendar::DateRange;
use crate::category::Category;

/// Optional bounds over date, category, and amount.
///
/// Every bound is inclusive. A missing bound places no constraint, and no
/// cross-field validation happens: `start_date > end_date` matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Earliest date.
    pub start_date: Option<NaiveDate>,
    /// Latest date.
    pub end_date: Option<NaiveDate>,
    /// Exact category.
    pub category: Option<Category>,
    /// Smallest amount.
    pub min_amount: Option<Decimal>,
    /// Largest amount.
    pub max_amount: Option<Decimal>,
}

impl ExpenseFilter {
    /// A filter that matches everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to an inclusive date range.
    #[must_use]
    pub fn within(range: DateRange) -> Self {
        Self {
            start_date: Some(range.start),
            end_date: Some(range.end),
            ..Self::default()
        }
    }

    /// Adds a category constraint. `None` leaves the filter unchanged.
    #[must_use]
    pub fn in_category(mut self, category: Option<Category>) -> Self {
        if category.is_some() {
            self.category = category;
        }
        self
    }

    /// Returns true if the expense satisfies every bound.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        self.matches_fields(expense.date, expense.category, expense.amount)
    }

    /// Field-level form of [`Self::matches`].
    #[must_use]
    pub fn matches_fields(&self, date: NaiveDate, category: Category, amount: Decimal) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
            && self.category.is_none_or(|c| c == category)
            && self.min_amount.is_none_or(|min| amount >= min)
            && self.max_amount.is_none_or(|max| amount <= max)
    }
}
