//! Report formatting for balance and statistics output

use std::collections::BTreeMap;

use crate::models::{Month, TransactionKind};
use crate::services::DailyPoint;

use super::format_amount;

/// Format an amount with color hints for terminal display
pub fn format_money_colored(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("\x1b[31m{}\x1b[0m", format_amount(amount, symbol)) // Red for negative
    } else if amount > 0.0 {
        format!("\x1b[32m{}\x1b[0m", format_amount(amount, symbol)) // Green for positive
    } else {
        format_amount(amount, symbol)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Current balance headline
pub fn format_balance(balance: f64, symbol: &str) -> String {
    format!("Current balance: {}\n", format_money_colored(balance, symbol))
}

/// Per-category totals, largest first, with each category's share
pub fn format_category_totals(
    totals: &BTreeMap<String, f64>,
    kind: TransactionKind,
    symbol: &str,
) -> String {
    let title = match kind {
        TransactionKind::Income => "Income by category",
        TransactionKind::Expense => "Expenses by category",
    };

    let mut output = format!("{}\n{}\n", title, separator(50));
    if totals.is_empty() {
        output.push_str("No transactions found.\n");
        return output;
    }

    let total: f64 = totals.values().sum();
    let max = totals.values().cloned().fold(0.0, f64::max);

    let mut rows: Vec<_> = totals.iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (category, amount) in rows {
        let pct = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
        output.push_str(&format!(
            "{:20} {:>12} {:>6} {}\n",
            category,
            format_amount(*amount, symbol),
            format_percentage(pct),
            format_bar(*amount, max, 12)
        ));
    }

    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!("{:20} {:>12}\n", "Total", format_amount(total, symbol)));
    output
}

/// Day-by-day balance series for a month
pub fn format_daily_series(points: &[DailyPoint], month: Month, symbol: &str) -> String {
    let mut output = format!("Daily balance for {}\n{}\n", month, separator(30));
    for point in points {
        output.push_str(&format!(
            "{:>3}. {:>14}\n",
            point.date.format("%-d"),
            format_amount(point.balance, symbol)
        ));
    }
    output
}
