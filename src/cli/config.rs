//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{BudgetPaths, ResetConfig, Settings};
use crate::error::BudgetResult;
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current settings
    Show,

    /// Day of the month on which a new period starts
    SetResetDay {
        /// Day (1-31); clamped to the last day in shorter months
        #[arg(value_parser = clap::value_parser!(u32).range(1..=31))]
        day: u32,
    },

    /// Carry the previous period's spending into the new one
    CarryOver {
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

/// Handle a config command
///
/// Changes are saved immediately and take effect on the next load.
pub fn handle_config_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    paths: &BudgetPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> BudgetResult<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", format_settings(settings));
        }
        ConfigCommands::SetResetDay { day } => {
            let reset = ResetConfig::new(day, settings.reset.carry_over);
            update_reset(store, paths, settings, reset)?;
            println!("Reset day set to {}", settings.reset.reset_day);
        }
        ConfigCommands::CarryOver { enabled } => {
            let reset = ResetConfig::new(settings.reset.reset_day, enabled);
            update_reset(store, paths, settings, reset)?;
            println!(
                "Carry-over {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }
    Ok(())
}

fn update_reset<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    paths: &BudgetPaths,
    settings: &mut Settings,
    reset: ResetConfig,
) -> BudgetResult<()> {
    settings.reset = reset;
    settings.save(paths)?;
    store.set_reset_config(reset);
    Ok(())
}

fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Reset day:       {}\n", settings.reset.reset_day));
    output.push_str(&format!(
        "Carry-over:      {}\n",
        if settings.reset.carry_over { "on" } else { "off" }
    ));
    output.push_str(&format!("Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("Date format:     {}\n", settings.date_format));
    output
}
