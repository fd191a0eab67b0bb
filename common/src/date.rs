//! Calendar [`Date`] without a time component.

#[cfg(feature = "postgres")]
use std::error::Error as StdError;
use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
#[cfg(feature = "postgres")]
use postgres_types::{
    accepts, private::BytesMut, to_sql_checked, FromSql, IsNull, ToSql, Type,
};
use time::{format_description::FormatItem, macros::format_description};

/// `YYYY-MM-DD` representation of a [`Date`].
const FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date in the proleptic Gregorian calendar.
///
/// Bookings operate on whole days only, so no time of day or offset is
/// carried.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] out of its components.
    ///
    /// # Errors
    ///
    /// If the provided components do not form a valid date.
    pub fn from_ymd(
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, ParseError> {
        let month =
            time::Month::try_from(month).map_err(ParseError::ComponentRange)?;
        time::Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(ParseError::ComponentRange)
    }

    /// Returns the number of whole days elapsed from this [`Date`] until the
    /// provided one.
    ///
    /// Negative if `other` precedes this [`Date`].
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).whole_days()
    }

    /// Returns the [`Date`] the provided number of `days` after this one.
    ///
    /// [`None`] on overflow of the supported calendar range.
    #[must_use]
    pub fn checked_add_days(self, days: u16) -> Option<Self> {
        self.0
            .checked_add(time::Duration::days(i64::from(days)))
            .map(Self)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, FORMAT)
            .map(Self)
            .map_err(ParseError::Parse)
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Error of constructing a [`Date`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Input is not a `YYYY-MM-DD` string.
    #[display("invalid date format: {_0}")]
    Parse(time::error::Parse),

    /// Some date component is out of its range.
    #[display("invalid date: {_0}")]
    ComponentRange(time::error::ComponentRange),
}

#[cfg(feature = "postgres")]
impl FromSql<'_> for Date {
    accepts!(DATE);

    fn from_sql(
        ty: &Type,
        raw: &[u8],
    ) -> Result<Self, Box<dyn StdError + Sync + Send>> {
        time::Date::from_sql(ty, raw).map(Self)
    }
}

#[cfg(feature = "postgres")]
impl ToSql for Date {
    accepts!(DATE);
    to_sql_checked!();

    fn to_sql(
        &self,
        ty: &Type,
        w: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        self.0.to_sql(ty, w)
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar date in a `YYYY-MM-DD` format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Date = super::Date;

    impl Date {
        fn to_output<S: ScalarValue>(d: &Date) -> Value<S> {
            Value::scalar(d.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Date` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Date` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_prints_iso_dates() {
        assert_eq!(date("2025-06-01"), Date::from_ymd(2025, 6, 1).unwrap());
        assert_eq!(date("2025-06-01").to_string(), "2025-06-01");

        assert!("2025-6-1".parse::<Date>().is_err());
        assert!("2025-02-30".parse::<Date>().is_err());
        assert!("01.06.2025".parse::<Date>().is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn counts_whole_days() {
        assert_eq!(date("2025-06-01").days_until(date("2025-06-04")), 3);
        assert_eq!(date("2025-06-01").days_until(date("2025-06-01")), 0);
        assert_eq!(date("2025-06-04").days_until(date("2025-06-01")), -3);
        assert_eq!(date("2024-02-28").days_until(date("2024-03-01")), 2);
        assert_eq!(date("2025-12-31").days_until(date("2026-01-01")), 1);
    }

    #[test]
    fn adds_days() {
        assert_eq!(
            date("2025-01-30").checked_add_days(3),
            Some(date("2025-02-02")),
        );
        assert_eq!(
            date("2025-01-30").checked_add_days(0),
            Some(date("2025-01-30")),
        );
    }
}
