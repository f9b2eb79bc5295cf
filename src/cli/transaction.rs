//! Transaction CLI commands
//!
//! Implements `add`, `remove`, `show` and `list`.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::Args;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{NewTransaction, TransactionId, TransactionKind};
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    pub kind: TransactionKind,

    /// Amount (e.g., "12.50")
    pub amount: f64,

    /// Category name
    #[arg(short, long)]
    pub category: String,

    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Transaction date (YYYY-MM-DD or RFC 3339, default: now)
    #[arg(long)]
    pub date: Option<String>,

    /// Mark as recurring monthly
    #[arg(short, long)]
    pub recurring: bool,
}

/// Handle `add`
pub fn handle_add<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    args: AddArgs,
) -> BudgetResult<()> {
    if !args.amount.is_finite() || args.amount < 0.0 {
        return Err(BudgetError::Validation(format!(
            "Amount must be a non-negative number, got {}",
            args.amount
        )));
    }

    let date = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => Utc::now(),
    };

    if !store
        .budget()
        .categories
        .contains(args.kind, &args.category)
    {
        tracing::debug!(category = %args.category, "category is not in the taxonomy");
    }

    let mut input = NewTransaction::new(
        args.kind,
        args.amount,
        args.category,
        args.description,
        date,
    );
    if args.recurring {
        input = input.monthly();
    }

    let txn = store.add_transaction(input);

    println!("Added transaction:");
    print!("{}", format_transaction_details(&txn, settings));
    Ok(())
}

/// Handle `remove`
///
/// Accepts a full identifier or an unambiguous prefix of one. Removing an
/// unknown identifier is reported but is not an error.
pub fn handle_remove<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    id: &str,
) -> BudgetResult<()> {
    let id = resolve_id(store, id)?;

    if store.remove_transaction(&id) {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with ID {}", id);
    }
    Ok(())
}

/// Handle `show`
pub fn handle_show<S: KeyValueStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    id: &str,
) -> BudgetResult<()> {
    let id = resolve_id(store, id)?;
    let txn = store
        .get_transaction(&id)
        .ok_or_else(|| BudgetError::transaction_not_found(id.as_str()))?;

    print!("{}", format_transaction_details(txn, settings));
    Ok(())
}

/// Handle `list`
pub fn handle_list<S: KeyValueStore>(store: &BudgetStore<S>, settings: &Settings, limit: usize) {
    print!(
        "{}",
        format_transaction_list(store.transactions(), settings, limit)
    );
}

/// Shortest prefix accepted in place of a full identifier
pub const MIN_ID_PREFIX_LEN: usize = 8;

/// Resolve a full identifier or a unique prefix
///
/// Input shorter than `MIN_ID_PREFIX_LEN` is only matched exactly.
fn resolve_id<S: KeyValueStore>(store: &BudgetStore<S>, input: &str) -> BudgetResult<TransactionId> {
    let input = input.trim();
    let exact = TransactionId::from(input);
    if store.get_transaction(&exact).is_some() || input.len() < MIN_ID_PREFIX_LEN {
        return Ok(exact);
    }

    let matches: Vec<_> = store
        .transactions()
        .iter()
        .filter(|t| t.id.as_str().starts_with(input))
        .collect();

    match matches.as_slice() {
        [single] => Ok(single.id.clone()),
        [] => Ok(exact),
        _ => Err(BudgetError::Validation(format!(
            "ID prefix '{}' matches {} transactions",
            input,
            matches.len()
        ))),
    }
}

/// Parse `YYYY-MM-DD` (local midnight) or a full RFC 3339 timestamp
pub fn parse_date(s: &str) -> BudgetResult<DateTime<Utc>> {
    parse_date_in(s, &Local)
}

/// Parse a date, placing a bare `YYYY-MM-DD` at midnight in `tz`
pub fn parse_date_in<Tz: TimeZone>(s: &str, tz: &Tz) -> BudgetResult<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date.and_time(NaiveTime::MIN);
        return Ok(tz
            .from_local_datetime(&midnight)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| midnight.and_utc()));
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            BudgetError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD or RFC 3339",
                s
            ))
        })
}
