//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::define_kind;

/// Number of decimal places money amounts are settled with.
pub const MINOR_UNITS: u32 = 2;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Returns this [`Money`] multiplied by the provided number of `units`.
    ///
    /// No rounding is applied.
    #[must_use]
    pub fn times(self, units: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(units),
            currency: self.currency,
        }
    }

    /// Rounds this [`Money`] to [`MINOR_UNITS`] decimal places, with
    /// midpoints rounded away from zero (`0.125` becomes `0.13`).
    #[must_use]
    pub fn round_half_up(self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                MINOR_UNITS,
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }

    /// Indicates whether this [`Money`] is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.trunc())
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 || !s.is_char_boundary(s.len() - 3) {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    #[case = "UPPERCASE"]
    enum Currency {
        #[doc = "US Dollar."]
        Usd,

        #[doc = "Euro."]
        Eur,

        #[doc = "Swiss Franc."]
        Chf,
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is an integer;
    /// - `minor` is an optional integer;
    /// - `currency` is a three-letter currency code.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn usd(s: &str) -> Money {
        Money {
            amount: s.parse::<Decimal>().unwrap(),
            currency: Currency::Usd,
        }
    }

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("123.45USD").unwrap(), usd("123.45"));
        assert_eq!(
            Money::from_str("123.45CHF").unwrap(),
            Money {
                amount: "123.45".parse().unwrap(),
                currency: Currency::Chf,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Us").is_err());
        assert!(Money::from_str("123.45Usdollar").is_err());
        assert!(Money::from_str("123.45RUB").is_err());

        assert!(Money::from_str("123.00USD").is_ok());
        assert!(Money::from_str("123USD").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(usd("123.45").to_string(), "123.45USD");
        assert_eq!(usd("123.40").to_string(), "123.40USD");
        assert_eq!(usd("300.00").to_string(), "300USD");
        assert_eq!(usd("300").to_string(), "300USD");
    }

    #[test]
    fn multiplies_by_units() {
        assert_eq!(usd("100.00").times(3), usd("300.00"));
        assert_eq!(usd("19.99").times(0), usd("0"));
        assert_eq!(usd("0.125").times(2), usd("0.25"));
    }

    #[test]
    fn rounds_midpoints_away_from_zero() {
        assert_eq!(usd("0.125").round_half_up(), usd("0.13"));
        assert_eq!(usd("0.135").round_half_up(), usd("0.14"));
        assert_eq!(usd("0.124").round_half_up(), usd("0.12"));
        assert_eq!(usd("2.5").round_half_up(), usd("2.50"));
        assert_eq!(usd("10").round_half_up().amount.to_string(), "10");
    }
}
