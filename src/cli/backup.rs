//! Backup CLI commands
//!
//! The backup mirror is a single file that is rewritten after every
//! change. These commands write it on demand or read it back.

use clap::Subcommand;

use crate::backup::restore::validate_backup;
use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Write the backup mirror now
    Create,

    /// Replace the budget with the backup mirror
    Restore {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show information about the backup mirror
    Info,
}

/// Handle a backup command
pub fn handle_backup_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    cmd: BackupCommands,
) -> BudgetResult<()> {
    match cmd {
        BackupCommands::Create => {
            let path = store.create_backup()?;
            println!("Backup written to {}", path.display());
        }

        BackupCommands::Restore { force } => {
            let backup = store
                .backup()
                .ok_or_else(|| BudgetError::Config("No backup location configured".into()))?;

            // Validate the backup first
            let candidate = validate_backup(backup.path())?;
            println!(
                "Backup contains {} transactions ({} current)",
                candidate.len(),
                store.transactions().len()
            );

            if !force {
                print!("This replaces all current transactions. Continue? (yes/no): ");
                std::io::Write::flush(&mut std::io::stdout())?;

                let mut confirm = String::new();
                std::io::stdin().read_line(&mut confirm)?;

                if confirm.trim().to_lowercase() != "yes" {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let count = store.restore_backup()?;
            println!("Restored {} transactions from backup", count);
        }

        BackupCommands::Info => match store.backup().and_then(|b| b.info()) {
            Some(info) => {
                println!("Backup: {}", info.path.display());
                if let Some(modified) = info.modified_at {
                    println!("Modified: {}", modified.format("%Y-%m-%d %H:%M:%S UTC"));
                }
                println!("Size: {}", format_size(info.size_bytes));
                if !info.is_valid {
                    println!("Warning: backup file is not valid JSON");
                }
            }
            None => {
                println!("No backup found.");
                println!("Create one with: budgetbuddy backup create");
            }
        },
    }

    Ok(())
}

/// Format file size for display
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
