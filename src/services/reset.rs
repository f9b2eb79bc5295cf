//! Period reset engine
//!
//! Decides whether the current month's reset boundary has been reached and,
//! if so, rolls the budget into a new period: everything dated before the
//! boundary is dropped, and with carry-over enabled a synthetic income
//! transaction is booked at the boundary.
//!
//! The carried amount is the sum of the dropped *expenses* only. Dropped
//! income and any earlier balance are not netted in. This mirrors the
//! behaviour budgets have always been rolled over with; whether it should
//! carry the remaining balance instead is a product decision.
//!
//! "Before the boundary" is judged on the user's calendar: the engine is
//! given the time zone `today` was taken in, and a transaction belongs to
//! the old period when its local date is earlier than the boundary date.
//!
//! The engine keeps no state between runs. A second evaluation within the
//! same period finds nothing dated before the boundary and leaves the
//! budget alone, so a carry-over is never booked twice.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::config::settings::ResetConfig;
use crate::models::{
    Budget, Month, NewTransaction, Transaction, TransactionId, CARRY_OVER_CATEGORY,
};

/// Description given to synthetic carry-over transactions
pub const CARRY_OVER_DESCRIPTION: &str = "Carried over from previous period";

/// What a reset evaluation did
#[derive(Debug, Clone, PartialEq)]
pub enum ResetOutcome {
    /// Today is before this month's boundary
    NotDue { boundary: NaiveDate },
    /// The boundary has passed but nothing predates it
    NothingToRoll { boundary: NaiveDate },
    /// The budget was rolled into a new period
    Applied(ResetSummary),
}

impl ResetOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Details of an applied reset
#[derive(Debug, Clone, PartialEq)]
pub struct ResetSummary {
    /// First day of the new period
    pub boundary: NaiveDate,
    /// Transactions dated before the boundary, now gone
    pub dropped: usize,
    /// Transactions dated on/after the boundary, kept
    pub retained: usize,
    /// Sum of the dropped expenses
    pub old_remainder: f64,
    /// Identifier of the synthetic carry-over, when one was booked
    pub carry_over_id: Option<TransactionId>,
}

/// Evaluates and applies period resets for one configuration
pub struct ResetEngine<'a, Tz: TimeZone> {
    config: &'a ResetConfig,
    tz: Tz,
}

impl<'a, Tz: TimeZone> ResetEngine<'a, Tz> {
    /// Engine evaluating dates in `tz`
    pub fn new(config: &'a ResetConfig, tz: Tz) -> Self {
        Self { config, tz }
    }

    /// This month's boundary date for `today`
    ///
    /// A reset day past the end of the month lands on the month's last day.
    pub fn boundary(&self, today: NaiveDate) -> NaiveDate {
        Month::of(today).day_clamped(self.config.reset_day)
    }

    /// Whether `today` is on or after this month's boundary
    pub fn is_due(&self, today: NaiveDate) -> bool {
        today >= self.boundary(today)
    }

    /// Roll `budget` into a new period if the boundary has been reached
    pub fn apply(&self, budget: Budget, today: NaiveDate) -> (Budget, ResetOutcome) {
        let boundary = self.boundary(today);
        if today < boundary {
            return (budget, ResetOutcome::NotDue { boundary });
        }

        let (old_period, retained): (Vec<Transaction>, Vec<Transaction>) = budget
            .transactions
            .into_iter()
            .partition(|t| t.date.with_timezone(&self.tz).date_naive() < boundary);

        if old_period.is_empty() {
            let budget = Budget {
                transactions: retained,
                categories: budget.categories,
            };
            return (budget, ResetOutcome::NothingToRoll { boundary });
        }

        let old_remainder: f64 = old_period
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        let mut next = Budget {
            transactions: retained,
            categories: budget.categories,
        };
        let retained_count = next.len();

        let carry_over_id = if self.config.carry_over {
            let carry = Transaction::from_input(NewTransaction::income(
                old_remainder,
                CARRY_OVER_CATEGORY,
                CARRY_OVER_DESCRIPTION,
                boundary_instant(boundary, &self.tz),
            ));
            let id = carry.id.clone();
            next.push(carry);
            Some(id)
        } else {
            None
        };

        tracing::info!(
            %boundary,
            dropped = old_period.len(),
            retained = retained_count,
            old_remainder,
            carry_over = carry_over_id.is_some(),
            "budget period reset applied"
        );

        let summary = ResetSummary {
            boundary,
            dropped: old_period.len(),
            retained: retained_count,
            old_remainder,
            carry_over_id,
        };
        (next, ResetOutcome::Applied(summary))
    }
}

/// Local midnight at the start of `boundary`, as a UTC instant
///
/// Where midnight is skipped by a DST change the boundary falls back to
/// midnight UTC.
pub fn boundary_instant<Tz: TimeZone>(boundary: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = boundary.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}
