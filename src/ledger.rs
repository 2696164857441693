//! Per-user, per-ISO-week cash-out history.
//!
//! Buckets are keyed purely by the computed week, never by insertion order, so
//! out-of-order dates inside one input land in the right week.

use crate::decimal::Amount;
use chrono::{Datelike, NaiveDate};
use log::trace;
use std::collections::HashMap;
use std::fmt;

/// ISO-8601 week-numbering year and week, e.g. `201805`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    /// Returns the key of the Monday-to-Sunday week containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        WeekKey {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.year, self.week)
    }
}

/// Running cash-out totals for one user in one week.
///
/// # Invariants
///
/// - `amount` (base currency) and `count` never decrease; a negative
///   cash-out is recorded as zero volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeeklyBucket {
    /// Cumulative cash-out volume in base currency.
    pub amount: Amount,

    /// Number of cash-out operations.
    pub count: u32,
}

/// Weekly cash-out state for every user seen in this run.
#[derive(Debug, Default)]
pub struct WeeklyLedger {
    buckets: HashMap<(u64, WeekKey), WeeklyBucket>,
}

impl WeeklyLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        WeeklyLedger {
            buckets: HashMap::new(),
        }
    }

    /// Returns the bucket for `(user_id, week)`, or an empty one. Never inserts.
    pub fn get(&self, user_id: u64, week: WeekKey) -> WeeklyBucket {
        self.buckets
            .get(&(user_id, week))
            .copied()
            .unwrap_or_default()
    }

    /// Records one cash-out of `amount_in_base` and returns the updated bucket.
    ///
    /// Returns `None`, leaving the bucket unchanged, if the weekly total would
    /// overflow.
    pub fn record_cash_out(
        &mut self,
        user_id: u64,
        week: WeekKey,
        amount_in_base: Amount,
    ) -> Option<WeeklyBucket> {
        let bucket = self.buckets.entry((user_id, week)).or_default();
        let amount = bucket.amount.checked_add(amount_in_base.max(Amount::ZERO))?;
        bucket.amount = amount;
        bucket.count += 1;

        trace!(
            "User {} week {}: {} cash-outs totalling {} EUR",
            user_id,
            week,
            bucket.count,
            bucket.amount
        );
        Some(*bucket)
    }

    /// Number of `(user, week)` buckets held.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if no cash-out has been recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
