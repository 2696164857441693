//! Supported currencies and conversion to and from the base currency (EUR).

use crate::decimal::Amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// Transaction currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Eur,
    Usd,
    Jpy,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Jpy];

    /// ISO 4217 code as it appears in the input.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
        }
    }

    /// Units of this currency per one unit of base currency.
    pub fn rate(&self) -> Decimal {
        match self {
            Currency::Eur => dec!(1),
            Currency::Usd => dec!(1.1497),
            Currency::Jpy => dec!(129.53),
        }
    }

    /// Number of decimal places of the smallest unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Eur | Currency::Usd => 2,
            Currency::Jpy => 0,
        }
    }

    /// Converts an amount in this currency into base currency.
    pub fn to_base(&self, amount: Amount) -> Option<Amount> {
        amount.checked_div(self.rate())
    }

    /// Converts an amount in base currency into this currency.
    pub fn from_base(&self, amount: Amount) -> Option<Amount> {
        amount.checked_mul(self.rate()).map(Amount::snap)
    }

    /// Rounds up to the currency's smallest unit and formats with its fixed
    /// number of decimal places.
    pub fn round_to_precision(&self, amount: Amount) -> Option<String> {
        let places = self.decimal_places();
        amount.ceil_to(places).map(|ceiled| ceiled.to_fixed(places))
    }
}

impl FromStr for Currency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or(())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Currency::from_str("EUR"), Ok(Currency::Eur));
        assert_eq!(Currency::from_str("USD"), Ok(Currency::Usd));
        assert_eq!(Currency::from_str("JPY"), Ok(Currency::Jpy));
        assert!(Currency::from_str("EURO").is_err());
        assert!(Currency::from_str("eur").is_err());
    }

    #[test]
    fn test_base_conversion() {
        let usd = Amount::new(dec!(1149.7));
        assert_eq!(Currency::Usd.to_base(usd), Some(Amount::new(dec!(1000))));
        assert_eq!(
            Currency::Jpy.from_base(Amount::new(dec!(5))),
            Some(Amount::new(dec!(647.65)))
        );
        assert_eq!(
            Currency::Eur.to_base(Amount::new(dec!(7))),
            Some(Amount::new(dec!(7)))
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        for currency in Currency::ALL {
            let amount = Amount::new(dec!(100));
            let base = currency.to_base(amount).unwrap();
            assert_eq!(currency.from_base(base), Some(amount));
        }
    }

    fn rounded(currency: Currency, amount: Decimal) -> String {
        currency.round_to_precision(Amount::new(amount)).unwrap()
    }

    #[test]
    fn test_round_to_precision() {
        assert_eq!(rounded(Currency::Eur, dec!(0.023)), "0.03");
        assert_eq!(rounded(Currency::Usd, dec!(0)), "0.00");
        assert_eq!(rounded(Currency::Jpy, dec!(647.65)), "648");
        assert_eq!(rounded(Currency::Jpy, dec!(8612)), "8612");
        assert_eq!(rounded(Currency::Usd, dec!(0.57485)), "0.58");
    }

    #[test]
    fn test_from_base_overflow() {
        assert!(Currency::Jpy.from_base(Amount::new(Decimal::MAX)).is_none());
        assert!(Currency::Eur.from_base(Amount::new(Decimal::MAX)).is_some());
    }
}
