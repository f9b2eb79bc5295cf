//! Derived figures over a transaction set
//!
//! Everything here is a pure function of its inputs and is recomputed on
//! demand; nothing is cached.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, TimeZone};

use crate::models::{Month, Transaction, TransactionKind};

/// Running balance at the end of one calendar day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// All-time balance: income minus expenses, with no date filtering
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Sum of amounts for one kind
pub fn total_for_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Summed amount per category, for transactions of one kind
///
/// Categories without a matching transaction are absent, not zero.
pub fn totals_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }
    totals
}

/// One point per calendar day of `month`
///
/// Each point sums every transaction in the same month whose day-of-month
/// is on or before that day. Transactions from other months never
/// contribute, so the series starts from zero each month rather than from
/// the carried balance. Dates are read on the calendar of `tz`.
pub fn daily_running_balance<Tz: TimeZone>(
    transactions: &[Transaction],
    month: Month,
    tz: &Tz,
) -> Vec<DailyPoint> {
    month
        .days()
        .map(|day| {
            let balance = transactions
                .iter()
                .filter(|t| {
                    let date = t.date.with_timezone(tz).date_naive();
                    month.contains(date) && date.day() <= day.day()
                })
                .map(Transaction::signed_amount)
                .sum();
            DailyPoint { date: day, balance }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId};
    use chrono::{FixedOffset, Utc};

    fn txn(kind: TransactionKind, amount: f64, category: &str, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::from_input(NewTransaction::new(
            kind,
            amount,
            category,
            "",
            Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        ))
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(TransactionKind::Income, 1000.0, "Salary", 2025, 3, 1),
            txn(TransactionKind::Expense, 200.0, "Rent", 2025, 3, 2),
            txn(TransactionKind::Expense, 35.5, "Groceries", 2025, 3, 10),
            txn(TransactionKind::Expense, 14.5, "Groceries", 2025, 2, 27),
            txn(TransactionKind::Income, 50.0, "Bonus", 2025, 4, 1),
        ]
    }

    #[test]
    fn test_balance_is_income_minus_expenses() {
        let txns = sample();
        let expected = total_for_kind(&txns, TransactionKind::Income)
            - total_for_kind(&txns, TransactionKind::Expense);
        assert_eq!(balance(&txns), expected);
        assert_eq!(balance(&txns), 800.0);
    }

    #[test]
    fn test_balance_of_empty_set() {
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn test_add_then_remove_restores_balance() {
        let mut txns = sample();
        let before = balance(&txns);

        let extra = txn(TransactionKind::Expense, 50.0, "Transport", 2025, 3, 3);
        let id: TransactionId = extra.id.clone();
        txns.push(extra);
        assert_eq!(balance(&txns), before - 50.0);

        txns.retain(|t| t.id != id);
        assert_eq!(balance(&txns), before);
    }

    #[test]
    fn test_totals_by_category() {
        let totals = totals_by_category(&sample(), TransactionKind::Expense);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Rent"], 200.0);
        assert_eq!(totals["Groceries"], 50.0);
        assert!(!totals.contains_key("Salary"));
    }

    #[test]
    fn test_totals_sum_to_kind_total() {
        let txns = sample();
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            let sum: f64 = totals_by_category(&txns, kind).values().sum();
            assert_eq!(sum, total_for_kind(&txns, kind));
        }
    }

    #[test]
    fn test_totals_never_zero_filled() {
        let totals = totals_by_category(&[], TransactionKind::Expense);
        assert!(totals.is_empty());
    }

    #[test]
    fn test_daily_series_has_one_point_per_day() {
        for (y, m, n) in [(2025, 2, 28), (2024, 2, 29), (2025, 4, 30), (2025, 3, 31)] {
            let month = Month::new(y, m).unwrap();
            let series = daily_running_balance(&sample(), month, &Utc);

            assert_eq!(series.len(), n);
            for (i, point) in series.iter().enumerate() {
                assert_eq!(point.date.day(), i as u32 + 1);
                assert!(month.contains(point.date));
            }
        }
    }

    #[test]
    fn test_daily_series_is_same_month_only() {
        let series = daily_running_balance(&sample(), Month::new(2025, 3).unwrap(), &Utc);

        assert_eq!(series[0].balance, 1000.0);
        assert_eq!(series[1].balance, 800.0);
        assert_eq!(series[8].balance, 800.0);
        assert_eq!(series[9].balance, 764.5);
        assert_eq!(series[30].balance, 764.5);
    }

    #[test]
    fn test_daily_series_ignores_other_years() {
        let txns = vec![txn(TransactionKind::Income, 10.0, "Salary", 2024, 3, 1)];
        let series = daily_running_balance(&txns, Month::new(2025, 3).unwrap(), &Utc);
        assert!(series.iter().all(|p| p.balance == 0.0));
    }

    #[test]
    fn test_daily_series_uses_local_calendar() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        // March 31st 23:00 UTC is already April 1st at +02:00
        let txns = vec![Transaction::from_input(NewTransaction::income(
            40.0,
            "Bonus",
            "",
            Utc.with_ymd_and_hms(2025, 3, 31, 23, 0, 0).unwrap(),
        ))];

        let april = daily_running_balance(&txns, Month::new(2025, 4).unwrap(), &cest);
        let march = daily_running_balance(&txns, Month::new(2025, 3).unwrap(), &cest);

        assert_eq!(april[0].balance, 40.0);
        assert!(march.iter().all(|p| p.balance == 0.0));
    }
}
