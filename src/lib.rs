//! BudgetBuddy - personal finance tracker
//!
//! This library provides the core of the BudgetBuddy income/expense tracker:
//! a single ledger of transactions, derived balance and statistics, and a
//! monthly period reset that can carry the previous period's spending over.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, months)
//! - `storage`: Key-value persistence gateway and atomic file helpers
//! - `services`: Transaction store, aggregation and period reset
//! - `backup`: Backup mirror
//! - `export`: JSON import/export and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetbuddy::config::{BudgetPaths, Settings};
//! use budgetbuddy::services::BudgetStore;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = BudgetStore::open(&paths, &settings);
//! store.load_budget();
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BudgetError;
