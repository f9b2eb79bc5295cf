//! Import and export CLI commands
//!
//! The JSON export is the same document `import` accepts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_transactions_csv;
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Export destination given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    /// `-` means stdout; nothing means the default export file
    pub fn resolve(arg: Option<&str>, paths: &BudgetPaths) -> Self {
        match arg {
            Some("-") => Self::Stdout,
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::File(paths.export_file()),
        }
    }
}

/// Handle `export`
pub fn handle_export<S: KeyValueStore>(
    store: &BudgetStore<S>,
    paths: &BudgetPaths,
    target: Option<&str>,
    csv: bool,
) -> BudgetResult<()> {
    match ExportTarget::resolve(target, paths) {
        ExportTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(store, &mut handle, csv)?;
            handle.flush()?;
        }
        ExportTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(store, &mut writer, csv)?;
            writer.flush()?;

            println!(
                "Exported {} transactions to {}",
                store.transactions().len(),
                path.display()
            );
        }
    }
    Ok(())
}

fn write_export<S: KeyValueStore, W: Write>(
    store: &BudgetStore<S>,
    writer: &mut W,
    csv: bool,
) -> BudgetResult<()> {
    if csv {
        export_transactions_csv(store.budget(), writer)?;
    } else {
        store.export_budget(writer)?;
    }
    Ok(())
}

/// Handle `import`
///
/// Without a path the user is prompted for one; an empty answer cancels
/// the import and leaves everything unchanged.
pub fn handle_import<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    path: Option<PathBuf>,
) -> BudgetResult<()> {
    let path = match path {
        Some(path) => path,
        None => match prompt_for_path()? {
            Some(path) => path,
            None => {
                tracing::info!("import cancelled");
                return Ok(());
            }
        },
    };

    let count = import_file(store, &path)?;
    println!("Imported {} transactions from {}", count, path.display());
    Ok(())
}

/// Replace the budget with the contents of a JSON file
pub fn import_file<S: KeyValueStore>(store: &mut BudgetStore<S>, path: &Path) -> BudgetResult<usize> {
    let contents = fs::read_to_string(path).map_err(|e| {
        BudgetError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;
    store.import_budget(&contents)
}

fn prompt_for_path() -> BudgetResult<Option<PathBuf>> {
    print!("File to import (leave empty to cancel): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(input)))
    }
}
