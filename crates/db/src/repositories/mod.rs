//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Aggregation happens in `tally-core` over the rows fetched here.

pub mod budget;
pub mod dashboard;
pub mod expense;


pub use budget::{BudgetRepoError, BudgetRepository, BudgetWithProgress};
pub use dashboard::{DashboardRepoError, DashboardRepository};
pub use expense::{ExpenseRepoError, ExpenseRepository};
