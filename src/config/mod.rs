//! Configuration module for BudgetBuddy
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - The period reset configuration

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{is_valid_date_format, ResetConfig, Settings};
