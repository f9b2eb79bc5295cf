//! Storage layer for BudgetBuddy
//!
//! The persistence gateway (a small key-value contract with file and
//! in-memory implementations), the budget snapshot codec on top of it, and
//! atomic JSON file helpers.

pub mod file_io;
pub mod gateway;
pub mod snapshot;

pub use file_io::{json_file_valid, write_json_atomic};
pub use gateway::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::{read_budget, write_budget, BUDGET_KEY};
