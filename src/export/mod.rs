//! Export module for BudgetBuddy
//!
//! - JSON: the full budget, also the import format
//! - CSV: transactions only, for spreadsheets

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use json::{export_budget_json, import_budget_json, validate_structure};
