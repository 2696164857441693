//! Typed model of one input operation.

use crate::currency::Currency;
use crate::decimal::Amount;
use chrono::NaiveDate;
use std::str::FromStr;

/// Who performs the operation; selects the fee rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Natural,
    Legal,
}

impl FromStr for UserType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(UserType::Natural),
            "legal" => Ok(UserType::Legal),
            _ => Err(()),
        }
    }
}

/// Operation type, resolved once during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    CashIn,
    CashOut,
}

impl FromStr for OperationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash_in" => Ok(OperationKind::CashIn),
            "cash_out" => Ok(OperationKind::CashOut),
            _ => Err(()),
        }
    }
}

/// A validated operation ready for fee calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Operation date (no time component)
    pub date: NaiveDate,

    /// User identifier
    pub user_id: u64,

    /// Natural or legal person
    pub user_type: UserType,

    /// Cash in or cash out
    pub kind: OperationKind,

    /// Amount in the operation's currency
    pub amount: Amount,

    /// Operation currency
    pub currency: Currency,

    /// 1-based input row the operation came from
    pub row: usize,
}
