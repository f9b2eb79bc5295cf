//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod config;
pub mod stats;
pub mod transaction;
pub mod transfer;

pub use backup::{handle_backup_command, BackupCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use stats::{handle_stats_command, StatsCommands};
pub use transaction::{handle_add, handle_list, handle_remove, handle_show, AddArgs};
pub use transfer::{handle_export, handle_import};
