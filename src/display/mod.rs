//! Display formatting for terminal output
//!
//! Provides utilities for formatting budgets, transactions and statistics
//! for terminal display.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_tree;
pub use report::{format_balance, format_category_totals, format_daily_series};
pub use transaction::{format_transaction_details, format_transaction_list};

use chrono::{DateTime, Local, Utc};

use crate::config::{is_valid_date_format, Settings};
use crate::models::Transaction;

/// Format used when the configured date format cannot be rendered
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// A transaction timestamp as a local calendar date in the configured format
pub fn format_date(date: &DateTime<Utc>, settings: &Settings) -> String {
    let format = if is_valid_date_format(&settings.date_format) {
        settings.date_format.as_str()
    } else {
        FALLBACK_DATE_FORMAT
    };
    date.with_timezone(&Local).format(format).to_string()
}

/// "€12.50", or "-€12.50" for negative amounts
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// "+ €12.50" for income, "- €12.50" for expenses
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_income() { '+' } else { '-' };
    format!("{} {}{:.2}", sign, symbol, txn.amount)
}
