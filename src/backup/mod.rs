//! Backup mirror for BudgetBuddy
//!
//! A single JSON file mirroring the full budget. It is rewritten after
//! every mutation and every period reset on a best-effort basis: a failed
//! backup is logged and never fails the operation that triggered it.
//!
//! The mirror uses the export format, so it can be restored (or imported
//! on another machine) through the normal import validation.

mod manager;
pub mod restore;

pub use manager::{BackupInfo, BackupManager};
