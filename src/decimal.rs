//! Monetary amount type backed by `rust_decimal`.
//!
//! All fee arithmetic runs on decimals so that weekly running totals do not
//! drift the way binary floating point would. Rounding only ever happens at
//! explicit points: [`Amount::ceil_to`] and [`Amount::snap`].
//!
//! Arithmetic is checked: any result outside the `Decimal` range is `None`.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string is not a numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a numeric literal: {0:?}")]
pub struct ParseAmountError(String);

/// A decimal monetary amount.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use commission_fees::Amount;
///
/// let amount = Amount::from_str("100.01").unwrap();
/// assert_eq!(amount.ceil_to(0).unwrap().to_string(), "101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Decimal places kept after a currency conversion.
    pub const SNAP_SCALE: u32 = 12;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Wraps a `Decimal`.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds up (towards positive infinity) to `places` decimal places.
    pub fn ceil_to(self, places: u32) -> Option<Self> {
        let pow = Decimal::from(10u64.pow(places));
        let ceiled = self.0.checked_mul(pow)?.ceil().checked_div(pow)?;
        if ceiled.is_zero() {
            // ceil(-0.4) leaves a signed zero behind
            return Some(Amount::ZERO);
        }
        Some(Amount(ceiled))
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Scales by a rate.
    pub fn checked_mul(self, rhs: Decimal) -> Option<Self> {
        self.0.checked_mul(rhs).map(Amount)
    }

    pub fn checked_div(self, rhs: Decimal) -> Option<Self> {
        self.0.checked_div(rhs).map(Amount)
    }

    /// Drops sub-`SNAP_SCALE` noise left by decimal division.
    pub fn snap(self) -> Self {
        Amount(self.0.round_dp(Self::SNAP_SCALE).normalize())
    }

    /// Formats with exactly `places` decimal places.
    pub fn to_fixed(&self, places: u32) -> String {
        format!("{:.*}", places as usize, self.0)
    }
}

/// Checks the general numeric-string grammar: optional sign, digits with an
/// optional decimal point, optional exponent. Surrounding whitespace is allowed.
pub fn is_numeric(s: &str) -> bool {
    let bytes = s.trim().as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
    }

    i == bytes.len()
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if !is_numeric(s) {
            return Err(ParseAmountError(s.to_string()));
        }

        let trimmed = s.trim();
        // "+5", "5." and "5.e3" are valid literals but not forms rust_decimal parses
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let padded = unsigned.replace(".e", ".0e").replace(".E", ".0E");
        let literal = padded.strip_suffix('.').unwrap_or(&padded);

        let parsed = if literal.contains(['e', 'E']) {
            Decimal::from_scientific(literal)
        } else {
            Decimal::from_str(literal)
        };

        parsed
            .map(Amount)
            .map_err(|_| ParseAmountError(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
