//! Transaction display formatting
//!
//! Provides the transaction list table and the detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

use super::{format_date, format_signed_amount};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "")]
    recurring: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.short().to_string(),
            date: format_date(&txn.date, settings),
            description: txn.description.clone(),
            category: txn.category.clone(),
            amount: format_signed_amount(txn, &settings.currency_symbol),
            recurring: if txn.is_recurring {
                "monthly".to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Newest-first transaction table, at most `limit` rows
pub fn format_transaction_list(
    transactions: &[Transaction],
    settings: &Settings,
    limit: usize,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let rows: Vec<_> = sorted
        .into_iter()
        .take(limit)
        .map(|txn| TransactionRow::new(txn, settings))
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    if transactions.len() > limit {
        output.push_str(&format!(
            "({} of {} transactions shown)\n",
            limit,
            transactions.len()
        ));
    }
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", format_date(&txn.date, settings)));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn, &settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    if txn.is_recurring {
        output.push_str("Recurring:   monthly\n");
    }

    output
}
