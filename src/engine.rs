//! Commission fee engine.
//!
//! Cash-in fees are stateless. Cash-out fees depend on what the same user
//! already cashed out during the same ISO week, which the engine keeps in its
//! [`WeeklyLedger`]. Operations must therefore be fed in input order.

use crate::decimal::Amount;
use crate::error::{FeeError, Field, Result};
use crate::ledger::{WeekKey, WeeklyLedger};
use crate::operation::{Operation, OperationKind};
use crate::schedule::FeeSchedule;
use log::debug;

/// Fees are computed at cent granularity before capping and final rounding.
const FEE_PLACES: u32 = 2;

/// Computes one fee per operation, tracking weekly cash-out history.
pub struct FeeEngine {
    schedule: FeeSchedule,
    ledger: WeeklyLedger,
}

impl FeeEngine {
    /// Creates an engine with the default fee schedule and an empty ledger.
    pub fn new() -> Self {
        Self::with_schedule(FeeSchedule::default())
    }

    /// Creates an engine with a custom fee schedule.
    pub fn with_schedule(schedule: FeeSchedule) -> Self {
        FeeEngine {
            schedule,
            ledger: WeeklyLedger::new(),
        }
    }

    /// Returns the fee for `op`, formatted in the operation's currency.
    ///
    /// Fails on the operation's `amount` if the arithmetic leaves the decimal
    /// range; the ledger is then left as it was.
    pub fn calculate(&mut self, op: &Operation) -> Result<String> {
        let fee = match op.kind {
            OperationKind::CashIn => self.cash_in_fee(op),
            OperationKind::CashOut => self.cash_out_fee(op),
        };
        fee.and_then(|fee| op.currency.round_to_precision(fee))
            .ok_or(FeeError::Validation {
                row: op.row,
                field: Field::Amount,
            })
    }

    /// Percentage of the amount, capped at the schedule's maximum.
    fn cash_in_fee(&self, op: &Operation) -> Option<Amount> {
        let rules = self.schedule.rules(op.user_type);
        let fee = op.amount.checked_mul(rules.cash_in_rate)?.ceil_to(FEE_PLACES)?;

        if op.currency.to_base(fee)? < rules.max_cash_in_fee {
            Some(fee)
        } else {
            debug!("User {}: cash-in fee {} {} capped", op.user_id, fee, op.currency);
            op.currency.from_base(rules.max_cash_in_fee)
        }
    }

    /// Free for the first `weekly_free_operations` cash-outs of the week while
    /// the volume allowance holds; afterwards charged on the part of this
    /// operation above the allowance.
    fn cash_out_fee(&mut self, op: &Operation) -> Option<Amount> {
        let rules = self.schedule.rules(op.user_type);
        let week = WeekKey::for_date(op.date);
        let amount_in_base = op.currency.to_base(op.amount)?;
        let prior = self.ledger.get(op.user_id, week);
        // negative cash-outs add no weekly volume
        let projected_total = prior
            .amount
            .checked_add(amount_in_base.max(Amount::ZERO))?;

        let fee = if prior.count >= rules.weekly_free_operations
            || projected_total > rules.weekly_free_amount
        {
            let excess = projected_total.checked_sub(rules.weekly_free_amount)?;
            // A negative excess means only the operation limit was hit: the
            // whole amount is chargeable.
            let chargeable = if excess < Amount::ZERO || excess >= amount_in_base {
                op.amount
            } else {
                op.currency.from_base(excess)?
            };

            let fee = chargeable
                .checked_mul(rules.cash_out_rate)?
                .ceil_to(FEE_PLACES)?;
            if op.currency.to_base(fee)? >= rules.min_cash_out_fee {
                fee
            } else {
                op.currency.from_base(rules.min_cash_out_fee)?
            }
        } else {
            Amount::ZERO
        };

        debug!(
            "User {} week {}: cash-out #{} of {} {}, fee {}",
            op.user_id,
            week,
            prior.count + 1,
            op.amount,
            op.currency,
            fee
        );

        self.ledger.record_cash_out(op.user_id, week, amount_in_base)?;
        Some(fee)
    }

    /// Weekly cash-out state accumulated so far.
    pub fn ledger(&self) -> &WeeklyLedger {
        &self.ledger
    }
}

impl Default for FeeEngine {
    fn default() -> Self {
        Self::new()
    }
}
