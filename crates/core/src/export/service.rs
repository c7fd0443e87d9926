//! Export rendering.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::error::ExportError;
use super::types::{ExportFormat, ExportRecord};
use crate::expense::Expense;

/// Header row of a CSV export. Written unquoted.
pub const CSV_HEADER: &str = "Date,Category,Description,Amount\n";

/// Service for rendering expense exports.
///
/// Records are written in the order given; callers pass them newest first.
pub struct ExportService;

impl ExportService {
    /// Renders `expenses` in the requested format.
    pub fn render(format: ExportFormat, expenses: &[Expense]) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => Self::to_csv(expenses),
            ExportFormat::Json => Self::to_json(expenses),
        }
    }

    /// CSV with an unquoted header and fully quoted rows.
    pub fn to_csv(expenses: &[Expense]) -> Result<String, ExportError> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(CSV_HEADER.as_bytes().to_vec());

        for expense in expenses {
            let date = expense.date.format("%Y-%m-%d").to_string();
            let amount = expense.amount.normalize().to_string();
            writer.write_record([
                date.as_str(),
                expense.category.id(),
                expense.description.as_deref().unwrap_or(""),
                amount.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Output(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ExportError::Output(e.to_string()))
    }

    /// Pretty-printed JSON array of [`ExportRecord`]s.
    pub fn to_json(expenses: &[Expense]) -> Result<String, ExportError> {
        let records: Vec<ExportRecord> = expenses.iter().map(ExportRecord::from).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}
