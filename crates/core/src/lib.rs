//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Repositories fetch records and hand them to the services here.
//!
//! # Modules
//!
//! - `category` - The canonical expense category list
//! - `calendar` - Month and year window arithmetic
//! - `expense` - Expense records, filters, and write validation
//! - `budget` - Budget records and progress computation
//! - `dashboard` - Monthly, per-category, and summary aggregation
//! - `export` - CSV and JSON serialization of expense sets

pub mod budget;
pub mod calendar;
pub mod category;
pub mod dashboard;
pub mod expense;
pub mod export;

pub use category::{Category, CategoryInfo};
