//! Expense error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Expense validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Amount does not fit the stored column.
    #[error("Amount {amount} exceeds the maximum of {max}")]
    AmountTooLarge {
        /// Rejected amount.
        amount: Decimal,
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Description exceeds the stored column width.
    #[error("Description is longer than {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}
