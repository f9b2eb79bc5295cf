//! Transaction model
//!
//! A transaction is either income or an expense. Amounts are stored as
//! non-negative numbers; the direction of the contribution to the balance
//! comes from the kind, never from the sign of the stored amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// +1 for income, -1 for expenses
    pub fn sign(&self) -> f64 {
        match self {
            Self::Income => 1.0,
            Self::Expense => -1.0,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// How often a recurring transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceInterval {
    Monthly,
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category name; not checked against the taxonomy
    pub category: String,

    /// Non-negative amount
    pub amount: f64,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    /// Whether this is flagged as recurring
    #[serde(default)]
    pub is_recurring: bool,

    /// Recurrence interval, only meaningful when `is_recurring` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurrenceInterval>,
}

impl Transaction {
    /// Materialize an input under a freshly generated identifier
    pub fn from_input(input: NewTransaction) -> Self {
        Self::with_id(TransactionId::new(), input)
    }

    /// Materialize an input under a given identifier
    pub fn with_id(id: TransactionId, input: NewTransaction) -> Self {
        Self {
            id,
            kind: input.kind,
            category: input.category,
            amount: input.amount,
            description: input.description,
            date: input.date,
            is_recurring: input.is_recurring,
            recurring_interval: input.recurring_interval,
        }
    }

    /// Contribution of this transaction to the balance
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

/// Input for `add_transaction`: every transaction field except the identifier
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: DateTime<Utc>,
    pub is_recurring: bool,
    pub recurring_interval: Option<RecurrenceInterval>,
}

impl NewTransaction {
    /// Create a one-off transaction
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            description: description.into(),
            date,
            is_recurring: false,
            recurring_interval: None,
        }
    }

    pub fn income(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(TransactionKind::Income, amount, category, description, date)
    }

    pub fn expense(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(TransactionKind::Expense, amount, category, description, date)
    }

    /// Flag the transaction as repeating monthly
    pub fn monthly(mut self) -> Self {
        self.is_recurring = true;
        self.recurring_interval = Some(RecurrenceInterval::Monthly);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::from_input(NewTransaction::income(1000.0, "Salary", "", date()));
        let expense =
            Transaction::from_input(NewTransaction::expense(200.0, "Rent", "March", date()));

        assert_eq!(income.signed_amount(), 1000.0);
        assert_eq!(expense.signed_amount(), -200.0);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_wire_format() {
        let txn = Transaction::with_id(
            TransactionId::from_string("1"),
            NewTransaction::expense(12.5, "Transport", "Bus", date()).monthly(),
        );
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["type"], "expense");
        assert_eq!(value["isRecurring"], true);
        assert_eq!(value["recurringInterval"], "monthly");
        assert_eq!(value["amount"], 12.5);
    }

    #[test]
    fn test_reads_javascript_iso_dates() {
        let json = r#"{
            "id": "1700000000000",
            "type": "income",
            "category": "Salary",
            "amount": 1000,
            "description": "Pay",
            "date": "2025-03-05T10:00:00.000Z",
            "isRecurring": false
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(txn.date, date());
        assert_eq!(txn.amount, 1000.0);
        assert_eq!(txn.recurring_interval, None);
    }
}
