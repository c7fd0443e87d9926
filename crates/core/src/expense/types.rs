//! Expense data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::ExpenseId;

use crate::category::Category;

/// A recorded expense. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Amount spent. Non-negative.
    pub amount: Decimal,
    /// Spending category.
    pub category: Category,
    /// Optional free-text note.
    pub description: Option<String>,
    /// Effective date chosen by the user.
    pub date: NaiveDate,
    /// When the record was stored.
    pub created_at: DateTime<Utc>,
}

/// Input for recording a new expense.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateExpenseInput {
    /// Amount spent.
    pub amount: Decimal,
    /// Spending category.
    pub category: Category,
    /// Optional note.
    pub description: Option<String>,
    /// Effective date.
    pub date: NaiveDate,
}
