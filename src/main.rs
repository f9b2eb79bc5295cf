use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use budgetbuddy::cli::{
    handle_add, handle_backup_command, handle_config_command, handle_export, handle_import,
    handle_list, handle_remove, handle_show, handle_stats_command, AddArgs, BackupCommands, ConfigCommands,
    StatsCommands,
};
use budgetbuddy::config::{BudgetPaths, Settings};
use budgetbuddy::display::{format_balance, format_category_tree};
use budgetbuddy::services::{balance, BudgetStore, ResetOutcome};

/// Environment variable holding the log filter
const LOG_ENV: &str = "BUDGETBUDDY_LOG";

#[derive(Parser)]
#[command(
    name = "budgetbuddy",
    version,
    about = "Personal income and expense tracker",
    long_about = "BudgetBuddy records income and expenses, reports the running \
                  balance and per-category statistics, and starts a new budget \
                  period on a configurable day of each month."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense
    Add(AddArgs),

    /// Remove a transaction by ID
    #[command(alias = "rm")]
    Remove {
        /// Transaction ID (or a unique prefix)
        id: String,
    },

    /// Show one transaction
    Show {
        /// Transaction ID (or a unique prefix)
        id: String,
    },

    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the current balance
    Balance,

    /// Spending statistics
    #[command(subcommand)]
    Stats(StatsCommands),

    /// List available categories
    Categories,

    /// Export the budget as JSON (or transactions as CSV)
    Export {
        /// Output file, or "-" for stdout (default: budget_export.json in the data directory)
        path: Option<String>,

        /// Export transactions as CSV instead
        #[arg(long)]
        csv: bool,
    },

    /// Replace the budget with a previously exported JSON file
    Import {
        /// File to import (prompted for when omitted)
        path: Option<std::path::PathBuf>,
    },

    /// Backup mirror commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Period reset and display settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show data file locations
    Paths,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Load the budget, rolling the period over if it is due
    let mut store = BudgetStore::open(&paths, &settings);
    if let ResetOutcome::Applied(summary) = store.load_budget() {
        eprintln!(
            "New budget period started on {} ({} transactions archived)",
            summary.boundary, summary.dropped
        );
    }

    match cli.command {
        Commands::Add(args) => handle_add(&mut store, &settings, args)?,
        Commands::Remove { id } => handle_remove(&mut store, &id)?,
        Commands::Show { id } => handle_show(&store, &settings, &id)?,
        Commands::List { limit } => handle_list(&store, &settings, limit),
        Commands::Balance => {
            print!(
                "{}",
                format_balance(balance(store.transactions()), &settings.currency_symbol)
            );
        }
        Commands::Stats(cmd) => handle_stats_command(&store, &settings, cmd)?,
        Commands::Categories => {
            print!("{}", format_category_tree(&store.budget().categories));
        }
        Commands::Export { path, csv } => handle_export(&store, &paths, path.as_deref(), csv)?,
        Commands::Import { path } => handle_import(&mut store, path)?,
        Commands::Backup(cmd) => handle_backup_command(&mut store, cmd)?,
        Commands::Config(cmd) => handle_config_command(&mut store, &paths, &mut settings, cmd)?,
        Commands::Paths => {
            println!("BudgetBuddy Paths");
            println!("=================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Backup file:      {}", paths.backup_file().display());
            println!("Default export:   {}", paths.export_file().display());
        }
    }

    Ok(())
}
