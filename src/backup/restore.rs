//! Manual recovery from the backup mirror
//!
//! The mirror is never read back automatically. Restoring it goes through
//! the same validation as an import.

use std::fs;
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::export::import_budget_json;
use crate::models::Budget;

/// Read the raw contents of the backup mirror
pub fn read_backup(path: &Path) -> BudgetResult<String> {
    if !path.exists() {
        return Err(BudgetError::NotFound {
            entity_type: "Backup",
            identifier: path.display().to_string(),
        });
    }

    fs::read_to_string(path)
        .map_err(|e| BudgetError::Io(format!("Failed to read backup file: {}", e)))
}

/// Check that the mirror would be accepted as an import, without applying it
pub fn validate_backup(path: &Path) -> BudgetResult<Budget> {
    import_budget_json(&read_backup(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupManager;
    use tempfile::TempDir;

    #[test]
    fn test_missing_backup_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_backup(&temp_dir.path().join("backup.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validate_written_backup() {
        let temp_dir = TempDir::new().unwrap();
        let manager = BackupManager::new(temp_dir.path().join("backup.json"));
        manager.create_backup(&Budget::new()).unwrap();

        assert_eq!(validate_backup(manager.path()).unwrap(), Budget::new());
    }

    #[test]
    fn test_validate_rejects_damaged_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");
        fs::write(&path, r#"{"transactions": []}"#).unwrap();

        assert!(validate_backup(&path).unwrap_err().is_import());
    }
}
