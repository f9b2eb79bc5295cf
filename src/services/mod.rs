//! Service layer for BudgetBuddy
//!
//! The transaction store owns budget state; the aggregator and the period
//! reset engine are pure functions over it.

pub mod aggregate;
pub mod reset;
pub mod store;

pub use aggregate::{balance, daily_running_balance, totals_by_category, DailyPoint};
pub use reset::{ResetEngine, ResetOutcome, ResetSummary};
pub use store::BudgetStore;
