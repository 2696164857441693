//! Row validation: turns six raw positional fields into an [`Operation`].
//!
//! Checks run in column order and the first failure wins, so a row with
//! several bad fields always reports the leftmost one.

use crate::currency::Currency;
use crate::decimal::Amount;
use crate::error::{FeeError, Field, Result};
use crate::operation::{Operation, OperationKind, UserType};
use chrono::NaiveDate;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates one raw row. `row` is the 1-based row number used in errors.
pub fn validate<S: AsRef<str>>(fields: &[S], row: usize) -> Result<Operation> {
    let invalid = |field: Field| FeeError::Validation { row, field };

    let [date, user_id, user_type, kind, amount, currency] = fields else {
        return Err(invalid(Field::Fields));
    };

    let date = parse_date(date.as_ref()).ok_or_else(|| invalid(Field::Date))?;
    let user_id = parse_user_id(user_id.as_ref()).ok_or_else(|| invalid(Field::UserId))?;
    let user_type =
        UserType::from_str(user_type.as_ref()).map_err(|_| invalid(Field::UserType))?;
    let kind =
        OperationKind::from_str(kind.as_ref()).map_err(|_| invalid(Field::OperationType))?;
    let amount = Amount::from_str(amount.as_ref()).map_err(|_| invalid(Field::Amount))?;
    let currency =
        Currency::from_str(currency.as_ref()).map_err(|_| invalid(Field::Currency))?;

    Ok(Operation {
        date,
        user_id,
        user_type,
        kind,
        amount,
        currency,
        row,
    })
}

/// Strict `YYYY-MM-DD`; out-of-range components are rejected, not rolled over.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.trim() != s {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Unsigned decimal digits only.
fn parse_user_id(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
