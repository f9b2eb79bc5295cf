//! Backup mirror for BudgetBuddy
//!
//! A single JSON file mirroring the full budget, rewritten wholesale after
//! every mutation and every period reset. It is never read back
//! automatically.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::BudgetResult;
use crate::models::Budget;
use crate::storage::file_io::{json_file_valid, write_json_atomic};

/// Metadata about the backup mirror
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Full path to the mirror
    pub path: PathBuf,
    /// Last modification time
    pub modified_at: Option<DateTime<Utc>>,
    /// Size in bytes
    pub size_bytes: u64,
    /// Whether the file parses as JSON
    pub is_valid: bool,
}

/// Writes the backup mirror
#[derive(Debug, Clone)]
pub struct BackupManager {
    path: PathBuf,
}

impl BackupManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the mirror file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the mirror with the given budget
    pub fn create_backup(&self, budget: &Budget) -> BudgetResult<PathBuf> {
        write_json_atomic(&self.path, budget)?;
        Ok(self.path.clone())
    }

    /// Rewrite the mirror, logging instead of failing
    ///
    /// Returns whether the write succeeded.
    pub fn create_backup_best_effort(&self, budget: &Budget) -> bool {
        match self.create_backup(budget) {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "backup mirror updated");
                true
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "backup write failed");
                false
            }
        }
    }

    /// Describe the current mirror, if one exists
    pub fn info(&self) -> Option<BackupInfo> {
        let metadata = std::fs::metadata(&self.path).ok()?;
        Some(BackupInfo {
            path: self.path.clone(),
            modified_at: metadata.modified().ok().map(DateTime::<Utc>::from),
            size_bytes: metadata.len(),
            is_valid: json_file_valid(&self.path),
        })
    }
}
