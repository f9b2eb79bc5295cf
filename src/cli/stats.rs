//! Statistics CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_totals, format_daily_series};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Month, TransactionKind};
use crate::services::{daily_running_balance, totals_by_category, BudgetStore};
use crate::storage::KeyValueStore;

/// Stats subcommands
#[derive(Subcommand, Debug)]
pub enum StatsCommands {
    /// Totals per category
    Categories {
        /// Transaction type to summarize
        #[arg(short, long, default_value = "expense")]
        kind: TransactionKind,
    },

    /// Daily running balance for one month
    Daily {
        /// Month (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a stats command
pub fn handle_stats_command<S: KeyValueStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    cmd: StatsCommands,
) -> BudgetResult<()> {
    match cmd {
        StatsCommands::Categories { kind } => {
            let totals = totals_by_category(store.transactions(), kind);
            print!(
                "{}",
                format_category_totals(&totals, kind, &settings.currency_symbol)
            );
        }
        StatsCommands::Daily { month } => {
            let month = match month {
                Some(s) => {
                    Month::parse(&s).map_err(|e| BudgetError::Validation(e.to_string()))?
                }
                None => Month::current(),
            };
            let points = daily_running_balance(store.transactions(), month, &Local);
            print!(
                "{}",
                format_daily_series(&points, month, &settings.currency_symbol)
            );
        }
    }
    Ok(())
}
