//! Budget tracking against recorded spending.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{Budget, BudgetProgress, BudgetStatus, CreateBudgetInput, UpdateBudgetInput};
