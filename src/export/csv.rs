//! CSV export of the transaction history

use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Recurring")]
    recurring: bool,
}

/// Export every transaction, in insertion order, as CSV
pub fn export_transactions_csv<W: Write>(budget: &Budget, writer: W) -> BudgetResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in &budget.transactions {
        csv_writer
            .serialize(CsvRow {
                id: txn.id.as_str(),
                date: txn.date.to_rfc3339(),
                kind: txn.kind.to_string(),
                category: &txn.category,
                description: &txn.description,
                amount: format!("{:.2}", txn.amount),
                recurring: txn.is_recurring,
            })
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(budget.transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, Transaction, TransactionId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_header_and_rows() {
        let mut budget = Budget::new();
        budget.push(Transaction::with_id(
            TransactionId::from_string("t1"),
            NewTransaction::expense(
                4.5,
                "Groceries",
                "Milk, eggs",
                Utc.with_ymd_and_hms(2025, 1, 2, 8, 0, 0).unwrap(),
            ),
        ));

        let mut out = Vec::new();
        let count = export_transactions_csv(&budget, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(count, 1);
        assert_eq!(lines[0], "ID,Date,Type,Category,Description,Amount,Recurring");
        assert_eq!(
            lines[1],
            "t1,2025-01-02T08:00:00+00:00,expense,Groceries,\"Milk, eggs\",4.50,false"
        );
    }

    #[test]
    fn test_empty_budget_writes_nothing() {
        let mut out = Vec::new();
        assert_eq!(export_transactions_csv(&Budget::new(), &mut out).unwrap(), 0);
    }
}
