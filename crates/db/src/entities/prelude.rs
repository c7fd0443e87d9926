//! Entity re-exports.

pub use super::budgets::Entity as Budgets;
pub use super::expenses::Entity as Expenses;
