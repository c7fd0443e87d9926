//! Budget error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Budget validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Budget name is blank.
    #[error("Budget name cannot be empty")]
    EmptyName,

    /// Budget limit must be above zero.
    #[error("Budget amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// Budget limit does not fit the stored column.
    #[error("Budget amount {amount} exceeds the maximum of {max}")]
    AmountTooLarge {
        /// Rejected amount.
        amount: Decimal,
        /// Largest accepted amount.
        max: Decimal,
    },
}
