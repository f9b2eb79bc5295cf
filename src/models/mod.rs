//! Core data models for BudgetBuddy
//!
//! Transactions, the category taxonomy, the budget aggregate that owns
//! them, and the calendar month helper.

pub mod budget;
pub mod category;
pub mod ids;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::{CategoryTaxonomy, CARRY_OVER_CATEGORY};
pub use ids::TransactionId;
pub use period::{Month, MonthParseError};
pub use transaction::{NewTransaction, RecurrenceInterval, Transaction, TransactionKind};
