//! Expense records, filters, and write validation.

pub mod error;
pub mod filter;
pub mod service;
pub mod types;

pub use error::ExpenseError;
pub use filter::ExpenseFilter;
pub use service::{ExpenseService, MAX_AMOUNT};
pub use types::{CreateExpenseInput, Expense};
