//! Export data types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ExportError;
use crate::expense::Expense;

/// Output format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// A JSON array of expense records.
    Json,
}

impl ExportFormat {
    /// Parses an optional format name, defaulting to CSV.
    pub fn parse_optional(value: Option<&str>) -> Result<Self, ExportError> {
        value.map_or(Ok(Self::Csv), str::parse)
    }

    /// MIME type served for this format.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Download name, e.g. `expenses-2025-01-31.csv`.
    #[must_use]
    pub fn file_name(self, today: NaiveDate) -> String {
        format!("expenses-{}.{}", today.format("%Y-%m-%d"), self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// One expense as written to a JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    /// Expense ID.
    pub id: String,
    /// Amount as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Category id.
    pub category: String,
    /// Description or null.
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `YYYY-MM-DD HH:MM:SS` in UTC.
    pub created_at: String,
}

impl From<&Expense> for ExportRecord {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            amount: expense.amount.normalize(),
            category: expense.category.id().to_string(),
            description: expense.description.clone(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            created_at: expense.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
