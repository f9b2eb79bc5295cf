//! Transaction store
//!
//! The single owner of budget state. All mutation goes through this type:
//! every add/remove rewrites the persisted snapshot and then refreshes the
//! backup mirror. Period resets are evaluated only when the budget is
//! (re)loaded, never on mutation.
//!
//! Persistence and backup failures are logged and otherwise ignored on the
//! mutation path; the in-memory budget always reflects the mutation.

use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDate, TimeZone};

use crate::backup::{restore, BackupManager};
use crate::config::{BudgetPaths, ResetConfig, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_budget_json, import_budget_json};
use crate::models::{Budget, NewTransaction, Transaction, TransactionId};
use crate::storage::snapshot::{read_budget, write_budget};
use crate::storage::{FileStore, KeyValueStore};

use super::reset::{ResetEngine, ResetOutcome};

/// Owned budget state plus its persistence collaborators
pub struct BudgetStore<S: KeyValueStore> {
    gateway: S,
    backup: Option<BackupManager>,
    reset: ResetConfig,
    budget: Budget,
}

impl BudgetStore<FileStore> {
    /// Store backed by the on-disk snapshot and backup mirror under `paths`
    pub fn open(paths: &BudgetPaths, settings: &Settings) -> Self {
        BudgetStore::new(FileStore::new(paths.data_dir()), settings.reset)
            .with_backup(BackupManager::new(paths.backup_file()))
    }
}

impl<S: KeyValueStore> BudgetStore<S> {
    /// Create a store holding an empty budget; call `load_budget` to populate it
    pub fn new(gateway: S, reset: ResetConfig) -> Self {
        Self {
            gateway,
            backup: None,
            reset,
            budget: Budget::new(),
        }
    }

    /// Mirror the budget to a backup file after every write
    pub fn with_backup(mut self, backup: BackupManager) -> Self {
        self.backup = Some(backup);
        self
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.budget.transactions
    }

    pub fn reset_config(&self) -> &ResetConfig {
        &self.reset
    }

    pub fn gateway(&self) -> &S {
        &self.gateway
    }

    pub fn backup(&self) -> Option<&BackupManager> {
        self.backup.as_ref()
    }

    /// Replace the reset configuration used by the next load
    pub fn set_reset_config(&mut self, config: ResetConfig) {
        self.reset = ResetConfig::new(config.reset_day, config.carry_over);
    }

    /// Look up a transaction by identifier
    pub fn get_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.budget.get(id)
    }

    /// Load the budget as of today's local date
    pub fn load_budget(&mut self) -> ResetOutcome {
        self.load_budget_on(Local::now().date_naive(), &Local)
    }

    /// Load the persisted budget, applying a period reset due on `today`
    ///
    /// Transaction dates are placed on the calendar of `tz`, the zone
    /// `today` was taken in.
    ///
    /// A missing or corrupt snapshot yields an empty budget with the
    /// default taxonomy. This never fails.
    pub fn load_budget_on<Tz: TimeZone>(&mut self, today: NaiveDate, tz: &Tz) -> ResetOutcome {
        let persisted = match read_budget(&self.gateway) {
            Ok(Some(budget)) => budget,
            Ok(None) => {
                tracing::info!("no saved budget found, starting empty");
                Budget::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load saved budget, starting empty");
                Budget::new()
            }
        };

        let (budget, outcome) = ResetEngine::new(&self.reset, tz.clone()).apply(persisted, today);
        self.budget = budget;

        if outcome.is_applied() {
            self.persist();
            self.write_backup();
        }

        tracing::debug!(transactions = self.budget.len(), "budget loaded");
        outcome
    }

    /// Append a new transaction under a fresh identifier
    ///
    /// No category or amount validation happens here.
    pub fn add_transaction(&mut self, input: NewTransaction) -> Transaction {
        let txn = Transaction::from_input(input);
        self.budget.push(txn.clone());

        tracing::debug!(id = %txn.id, kind = %txn.kind, amount = txn.amount, "transaction added");
        self.persist();
        self.write_backup();
        txn
    }

    /// Remove a transaction; an unknown identifier is not an error
    ///
    /// Returns whether a transaction was removed.
    pub fn remove_transaction(&mut self, id: &TransactionId) -> bool {
        let removed = self.budget.remove(id);
        if removed {
            tracing::debug!(%id, "transaction removed");
        } else {
            tracing::debug!(%id, "remove requested for unknown transaction");
        }

        self.persist();
        self.write_backup();
        removed
    }

    /// Replace the whole budget with an import payload
    ///
    /// The payload is validated before anything is written; on any error
    /// both the persisted and in-memory budgets are left as they were.
    pub fn import_budget(&mut self, payload: &str) -> BudgetResult<usize> {
        let imported = import_budget_json(payload).map_err(|e| {
            tracing::warn!(error = %e, "import rejected");
            e
        })?;

        write_budget(&mut self.gateway, &imported)?;
        self.budget = imported;
        self.write_backup();

        tracing::info!(transactions = self.budget.len(), "budget imported");
        Ok(self.budget.len())
    }

    /// Write the budget as pretty-printed JSON
    pub fn export_budget<W: Write>(&self, writer: &mut W) -> BudgetResult<()> {
        export_budget_json(&self.budget, writer)
    }

    /// Write the backup mirror now, reporting failure to the caller
    pub fn create_backup(&self) -> BudgetResult<PathBuf> {
        let backup = self
            .backup
            .as_ref()
            .ok_or_else(|| BudgetError::Config("No backup location configured".into()))?;
        backup.create_backup(&self.budget)
    }

    /// Replace the budget with the contents of the backup mirror
    pub fn restore_backup(&mut self) -> BudgetResult<usize> {
        let backup = self
            .backup
            .as_ref()
            .ok_or_else(|| BudgetError::Config("No backup location configured".into()))?;
        let contents = restore::read_backup(backup.path())?;
        self.import_budget(&contents)
    }

    fn persist(&mut self) -> bool {
        match write_budget(&mut self.gateway, &self.budget) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to save budget");
                false
            }
        }
    }

    fn write_backup(&self) {
        if let Some(backup) = &self.backup {
            backup.create_backup_best_effort(&self.budget);
        }
    }
}
