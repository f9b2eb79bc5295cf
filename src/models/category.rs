//! Category taxonomy
//!
//! Two ordered lists of category names, one per transaction kind. The lists
//! may share names. Transactions are free to reference categories outside
//! the taxonomy; the taxonomy only drives what is offered for selection.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionKind;

/// Category used for synthetic carry-over transactions
pub const CARRY_OVER_CATEGORY: &str = "Other/Misc";

/// Default income categories for a fresh budget
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", CARRY_OVER_CATEGORY];

/// Default expense categories for a fresh budget
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Rent",
    "Groceries",
    "Transport",
    "Entertainment",
    CARRY_OVER_CATEGORY,
];

/// Category names grouped by transaction kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTaxonomy {
    pub income: Vec<String>,
    pub expense: Vec<String>,
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            expense: DEFAULT_EXPENSE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategoryTaxonomy {
    /// Categories offered for a transaction kind
    pub fn for_kind(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    /// Whether `name` is listed for `kind`
    pub fn contains(&self, kind: TransactionKind, name: &str) -> bool {
        self.for_kind(kind).iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy() {
        let taxonomy = CategoryTaxonomy::default();
        assert_eq!(taxonomy.income.len(), 3);
        assert_eq!(taxonomy.expense.len(), 5);
        assert!(taxonomy.contains(TransactionKind::Expense, "Transport"));
        assert!(!taxonomy.contains(TransactionKind::Income, "Transport"));
    }

    #[test]
    fn test_kinds_may_share_names() {
        let taxonomy = CategoryTaxonomy::default();
        assert!(taxonomy.contains(TransactionKind::Income, CARRY_OVER_CATEGORY));
        assert!(taxonomy.contains(TransactionKind::Expense, CARRY_OVER_CATEGORY));
    }
}
