//! The budget aggregate
//!
//! A budget is the full transaction history (in insertion order, which is
//! not necessarily chronological) plus the category taxonomy. It is the
//! only thing that gets persisted, backed up, exported, and imported.

use serde::{Deserialize, Serialize};

use super::category::CategoryTaxonomy;
use super::ids::TransactionId;
use super::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    pub transactions: Vec<Transaction>,
    pub categories: CategoryTaxonomy,
}

impl Budget {
    /// An empty budget with the default taxonomy
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a transaction by identifier
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Append a transaction at the end of the history
    pub fn push(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Remove every transaction with the given identifier
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        self.transactions.len() != before
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTransaction;
    use chrono::Utc;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut budget = Budget::new();
        let later = Transaction::from_input(NewTransaction::expense(1.0, "A", "", Utc::now()));
        let earlier = Transaction::from_input(NewTransaction::expense(
            2.0,
            "B",
            "",
            Utc::now() - chrono::Duration::days(10),
        ));

        budget.push(later.clone());
        budget.push(earlier.clone());

        assert_eq!(budget.transactions, vec![later, earlier]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut budget = Budget::new();
        budget.push(Transaction::from_input(NewTransaction::income(
            5.0,
            "Salary",
            "",
            Utc::now(),
        )));

        assert!(!budget.remove(&TransactionId::from_string("missing")));
        assert_eq!(budget.len(), 1);
    }
}
