//! Fee schedule: commission rates, caps, and weekly allowances per user type.
//!
//! Monetary limits are expressed in base currency (EUR). Rates are fractions
//! of the operation amount (`0.003` is 0.3%).

use crate::decimal::Amount;
use crate::operation::UserType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fee rules applying to one user type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTypeRules {
    /// Cash-in commission rate.
    pub cash_in_rate: Decimal,

    /// Upper bound of a cash-in fee, in base currency.
    pub max_cash_in_fee: Amount,

    /// Cash-out commission rate.
    pub cash_out_rate: Decimal,

    /// Lower bound of a chargeable cash-out fee, in base currency.
    pub min_cash_out_fee: Amount,

    /// Weekly cash-out volume free of charge, in base currency.
    pub weekly_free_amount: Amount,

    /// Number of cash-outs per week that may use the free allowance.
    pub weekly_free_operations: u32,
}

/// Complete fee schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    pub natural: UserTypeRules,
    pub legal: UserTypeRules,
}

impl FeeSchedule {
    /// Returns the rules for `user_type`.
    pub fn rules(&self, user_type: UserType) -> &UserTypeRules {
        match user_type {
            UserType::Natural => &self.natural,
            UserType::Legal => &self.legal,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        FeeSchedule {
            natural: UserTypeRules {
                cash_in_rate: dec!(0.03),
                max_cash_in_fee: Amount::new(dec!(5)),
                cash_out_rate: dec!(0.003),
                min_cash_out_fee: Amount::ZERO,
                weekly_free_amount: Amount::new(dec!(1000)),
                weekly_free_operations: 3,
            },
            legal: UserTypeRules {
                cash_in_rate: dec!(0.03),
                max_cash_in_fee: Amount::new(dec!(5)),
                cash_out_rate: dec!(0.003),
                min_cash_out_fee: Amount::new(dec!(0.5)),
                weekly_free_amount: Amount::ZERO,
                weekly_free_operations: 0,
            },
        }
    }
}
