//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Colors assigned to category groups by position, cycled when exhausted.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#8884d8", "#83a6ed", "#8dd1e1", "#82ca9d", "#a4de6c", "#d0ed57", "#ffc658", "#ff8042",
];

/// Spending for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Month number, 1 = January.
    pub month: u32,
    /// Short month name (`Jan`).
    pub label: String,
    /// Sum of the month's expenses.
    pub amount: Decimal,
}

/// Spending for one category in the current month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category id.
    pub name: String,
    /// Category display name.
    pub label: String,
    /// Sum of the category's expenses.
    pub value: Decimal,
    /// Chart color from [`CATEGORY_PALETTE`].
    pub color: String,
}

/// Highest-spend category of the current month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCategory {
    /// Category id, or `none` for an empty month.
    pub name: String,
    /// Amount spent in that category.
    pub amount: Decimal,
}

impl TopCategory {
    /// Placeholder used when nothing was spent this month.
    pub const NONE: &'static str = "none";

    /// The empty-month placeholder.
    #[must_use]
    pub fn none() -> Self {
        Self {
            name: Self::NONE.to_string(),
            amount: Decimal::ZERO,
        }
    }
}

/// Headline dashboard figures relative to a reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Total for the whole current calendar month.
    pub current_month: Decimal,
    /// Total for the whole previous calendar month.
    pub previous_month: Decimal,
    /// `(previous - current) / previous * 100`, two decimal places.
    ///
    /// Positive means spending went down. Zero when the previous month is empty.
    pub monthly_change: Decimal,
    /// Current-month total divided by the day of the month.
    pub daily_average: Decimal,
    /// Total from January 1st through the reference day.
    pub year_to_date: Decimal,
    /// Biggest category this month.
    pub top_category: TopCategory,
}
