//! Expense export as CSV or JSON.

pub mod error;
pub mod service;
pub mod types;

pub use error::ExportError;
pub use service::ExportService;
pub use types::{ExportFormat, ExportRecord};
