//! Dashboard aggregates: monthly and category totals plus headline figures.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::DashboardService;
pub use types::{CATEGORY_PALETTE, CategoryTotal, ExpenseSummary, MonthlyTotal, TopCategory};
