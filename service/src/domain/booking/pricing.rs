//! Validation and pricing of booking requests.
//!
//! Every kind of booking goes through the same rule: the request is checked
//! against the [`Terms`] of the booked item, and, once admitted, priced by
//! the item's [`Rate`]. Checks run in a fixed order and the first failed one
//! is reported:
//! 1. the user is authenticated;
//! 2. the item is available;
//! 3. both dates of a [`Schedule::DateRange`] are present, and the end date
//!    is strictly after the start date;
//! 4. the party is non-empty and fits the item's [`Capacity`].

use common::{Date, Money};
use derive_more::{Display, Error as StdError};

use crate::domain::{booking::Status, user};

/// Conditions an item is booked on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Terms {
    /// Indicator whether the item accepts bookings at all.
    pub available: bool,

    /// [`Capacity`] of a single booking.
    pub capacity: Capacity,

    /// [`Rate`] the item is priced by.
    pub rate: Rate,
}

/// Bound on the party size (or quantity) of a single booking.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Capacity {
    /// At most the contained number.
    #[display("{_0}")]
    Bounded(u16),

    /// No upper bound.
    #[display("unlimited")]
    Unbounded,
}

impl Capacity {
    /// Checks whether a party of the provided size fits this [`Capacity`].
    ///
    /// Empty parties never fit.
    #[must_use]
    pub fn admits(self, party_size: u16) -> bool {
        party_size >= 1
            && match self {
                Self::Bounded(bound) => party_size <= bound,
                Self::Unbounded => true,
            }
    }
}

/// Way an item is priced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rate {
    /// Price of a single night, charged for every night of the stay.
    PerNight(Money),

    /// Price of a single unit for a day, charged for every unit and every
    /// day of the rental.
    PerUnitDay(Money),

    /// Price of the whole booking, regardless of its dates and party.
    Flat(Money),
}

impl Rate {
    /// Returns the price of a single unit of this [`Rate`].
    #[must_use]
    pub fn unit_price(self) -> Money {
        match self {
            Self::PerNight(m) | Self::PerUnitDay(m) | Self::Flat(m) => m,
        }
    }

    /// Returns the number of charged units for a booking of the provided
    /// [`Span`] and party size.
    #[must_use]
    pub fn units(self, span: Span, party_size: u16) -> u32 {
        match self {
            Self::PerNight(_) => span.days(),
            Self::PerUnitDay(_) => {
                span.days().saturating_mul(u32::from(party_size))
            }
            Self::Flat(_) => 1,
        }
    }
}

/// Dates of a booking request, as the user provided them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Schedule {
    /// Stay or rental between two dates, end date exclusive.
    DateRange {
        /// First day, if selected.
        start: Option<Date>,

        /// Day after the last one, if selected.
        end: Option<Date>,
    },

    /// Single date the booking starts on.
    SingleDate(Date),
}

impl Schedule {
    /// Validates this [`Schedule`] into a [`Span`].
    ///
    /// # Errors
    ///
    /// - [`Error::MissingDates`] if any date of a [`Schedule::DateRange`] is
    ///   absent;
    /// - [`Error::InvalidDateRange`] if the end date of a
    ///   [`Schedule::DateRange`] is not after its start date.
    pub fn to_span(self) -> Result<Span, Error> {
        match self {
            Self::DateRange { start, end } => {
                let (Some(start), Some(end)) = (start, end) else {
                    return Err(Error::MissingDates);
                };
                if end <= start {
                    return Err(Error::InvalidDateRange);
                }
                Ok(Span::Range { start, end })
            }
            Self::SingleDate(day) => Ok(Span::Day(day)),
        }
    }
}

/// Validated dates of a booking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Span {
    /// Non-empty range of days, end date exclusive.
    Range {
        /// First day.
        start: Date,

        /// Day after the last one, always after the `start`.
        end: Date,
    },

    /// Single day.
    Day(Date),
}

impl Span {
    /// Returns the first day of this [`Span`].
    #[must_use]
    pub fn start(self) -> Date {
        match self {
            Self::Range { start, .. } | Self::Day(start) => start,
        }
    }

    /// Returns the first day and the exclusive end of this [`Span`].
    ///
    /// Both are the same day for a [`Span::Day`].
    #[must_use]
    pub fn bounds(self) -> (Date, Date) {
        match self {
            Self::Range { start, end } => (start, end),
            Self::Day(day) => (day, day),
        }
    }

    /// Returns the number of whole days in this [`Span`].
    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            Self::Range { start, end } => {
                u32::try_from(start.days_until(end)).unwrap_or(u32::MAX)
            }
            Self::Day(_) => 1,
        }
    }
}

/// Booking request to validate and price.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Request {
    /// Requested [`Schedule`].
    pub schedule: Schedule,

    /// Number of guests, participants, students or units.
    pub party_size: u16,
}

/// Price of an admissible booking request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Validated [`Span`] of the booking.
    pub span: Span,

    /// Number of guests, participants, students or units.
    pub party_size: u16,

    /// Number of charged units (nights, unit-days or a single flat fee).
    pub units: u32,

    /// Price of a single charged unit.
    pub unit_price: Money,

    /// Total price, rounded to cents.
    pub total: Money,
}

/// Admitted and priced booking of a user, ready to be persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PricedBooking {
    /// ID of the user booking.
    pub user_id: user::Id,

    /// [`Quote`] of the booking.
    pub quote: Quote,

    /// Initial [`Status`] of the booking.
    pub status: Status,
}

/// Checks the provided [`Request`] against the item's [`Terms`] and prices
/// it, without regard to who is booking.
///
/// # Errors
///
/// The first failed check, in order: [`Error::ItemUnavailable`],
/// [`Error::MissingDates`], [`Error::InvalidDateRange`],
/// [`Error::CapacityExceeded`].
pub fn quote(terms: &Terms, request: Request) -> Result<Quote, Error> {
    let Request {
        schedule,
        party_size,
    } = request;

    if !terms.available {
        return Err(Error::ItemUnavailable);
    }
    let span = schedule.to_span()?;
    if !terms.capacity.admits(party_size) {
        return Err(Error::CapacityExceeded {
            capacity: terms.capacity,
            party_size,
        });
    }

    let units = terms.rate.units(span, party_size);
    let unit_price = terms.rate.unit_price();
    Ok(Quote {
        span,
        party_size,
        units,
        unit_price,
        total: unit_price.times(units).round_half_up(),
    })
}

/// Validates the provided [`Request`] of the user against the item's
/// [`Terms`] and prices it.
///
/// Admitted bookings are [`Status::Confirmed`] straight away.
///
/// # Errors
///
/// [`Error::NotAuthenticated`] if no `user_id` is provided, regardless of the
/// [`Request`]. Otherwise, see [`quote()`].
pub fn validate_and_price(
    user_id: Option<user::Id>,
    terms: &Terms,
    request: Request,
) -> Result<PricedBooking, Error> {
    let user_id = user_id.ok_or(Error::NotAuthenticated)?;
    Ok(PricedBooking {
        user_id,
        quote: quote(terms, request)?,
        status: Status::Confirmed,
    })
}

/// Reason of a booking request being rejected.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// No authenticated user.
    #[display("Authentication is required to book")]
    NotAuthenticated,

    /// Item does not accept bookings.
    #[display("Item is not available for booking")]
    ItemUnavailable,

    /// Start or end date is not selected.
    #[display("Both start and end dates must be selected")]
    MissingDates,

    /// End date is not after the start date.
    #[display("End date must be after start date")]
    InvalidDateRange,

    /// Party size is zero or exceeds the [`Capacity`].
    #[display("{}", capacity_message(*capacity, *party_size))]
    CapacityExceeded {
        /// [`Capacity`] of the item.
        capacity: Capacity,

        /// Rejected party size.
        party_size: u16,
    },
}

/// Describes the violated side of the [`Capacity`] bound.
fn capacity_message(capacity: Capacity, party_size: u16) -> String {
    if party_size == 0 {
        "Party size must be at least 1".to_owned()
    } else {
        format!("Maximum capacity is {capacity}")
    }
}

#[cfg(test)]
mod spec {
    use common::{Currency, Date, Money};

    use crate::domain::{booking::Status, user};

    use super::{
        quote, validate_and_price, Capacity, Error, Rate, Request, Schedule,
        Span, Terms,
    };

    fn usd(s: &str) -> Money {
        Money {
            amount: s.parse().unwrap(),
            currency: Currency::Usd,
        }
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> Schedule {
        Schedule::DateRange {
            start: Some(date(start)),
            end: Some(date(end)),
        }
    }

    fn user() -> Option<user::Id> {
        Some(uuid::Uuid::nil().into())
    }

    fn cabin() -> Terms {
        Terms {
            available: true,
            capacity: Capacity::Bounded(4),
            rate: Rate::PerNight(usd("100.00")),
        }
    }

    #[test]
    fn prices_nights_of_stay() {
        let priced = validate_and_price(
            user(),
            &cabin(),
            Request {
                schedule: range("2025-06-01", "2025-06-04"),
                party_size: 2,
            },
        )
        .unwrap();

        assert_eq!(priced.user_id, user().unwrap());
        assert_eq!(priced.status, Status::Confirmed);
        assert_eq!(priced.quote.units, 3);
        assert_eq!(priced.quote.total, usd("300.00"));
        assert_eq!(
            priced.quote.span,
            Span::Range {
                start: date("2025-06-01"),
                end: date("2025-06-04"),
            },
        );
    }

    #[test]
    fn requires_end_after_start() {
        let terms = cabin();
        let start = date("2025-06-10");
        for end in [
            "2025-06-07",
            "2025-06-09",
            "2025-06-10",
            "2025-06-11",
            "2025-06-13",
        ]
        .map(date)
        {
            let res = quote(
                &terms,
                Request {
                    schedule: Schedule::DateRange {
                        start: Some(start),
                        end: Some(end),
                    },
                    party_size: 1,
                },
            );

            if end > start {
                assert!(res.is_ok(), "{start} -> {end}: {res:?}");
            } else {
                assert_eq!(
                    res,
                    Err(Error::InvalidDateRange),
                    "{start} -> {end}",
                );
            }
        }
    }

    #[test]
    fn rejects_same_day_stay() {
        assert_eq!(
            validate_and_price(
                user(),
                &cabin(),
                Request {
                    schedule: range("2025-06-01", "2025-06-01"),
                    party_size: 1,
                },
            ),
            Err(Error::InvalidDateRange),
        );
    }

    #[test]
    fn requires_both_dates() {
        for (start, end) in [
            (None, None),
            (Some(date("2025-06-01")), None),
            (None, Some(date("2025-06-04"))),
        ] {
            assert_eq!(
                quote(
                    &cabin(),
                    Request {
                        schedule: Schedule::DateRange { start, end },
                        party_size: 1,
                    },
                ),
                Err(Error::MissingDates),
            );
        }
    }

    #[test]
    fn bounds_party_size_by_capacity() {
        let terms = cabin();
        for party_size in 0..=6 {
            let res = quote(
                &terms,
                Request {
                    schedule: range("2025-06-01", "2025-06-02"),
                    party_size,
                },
            );

            if (1..=4).contains(&party_size) {
                assert!(res.is_ok(), "party of {party_size}: {res:?}");
            } else {
                assert_eq!(
                    res,
                    Err(Error::CapacityExceeded {
                        capacity: Capacity::Bounded(4),
                        party_size,
                    }),
                    "party of {party_size}",
                );
            }
        }
    }

    #[test]
    fn reports_bound_in_capacity_error() {
        let exceeded = |party_size| Error::CapacityExceeded {
            capacity: Capacity::Bounded(4),
            party_size,
        };

        assert_eq!(exceeded(5).to_string(), "Maximum capacity is 4");
        assert_eq!(exceeded(0).to_string(), "Party size must be at least 1");
    }

    #[test]
    fn rejects_unavailable_item_first() {
        let terms = Terms {
            available: false,
            ..cabin()
        };

        for request in [
            Request {
                schedule: range("2025-06-01", "2025-06-04"),
                party_size: 2,
            },
            Request {
                schedule: range("2025-06-04", "2025-06-01"),
                party_size: 2,
            },
            Request {
                schedule: Schedule::DateRange {
                    start: None,
                    end: None,
                },
                party_size: 40,
            },
        ] {
            assert_eq!(quote(&terms, request), Err(Error::ItemUnavailable));
        }
    }

    #[test]
    fn flat_fee_ignores_dates() {
        let terms = Terms {
            available: true,
            capacity: Capacity::Bounded(10),
            rate: Rate::Flat(usd("45.50")),
        };

        for schedule in [
            range("2025-06-01", "2025-06-02"),
            range("2025-06-01", "2025-07-01"),
            Schedule::SingleDate(date("2025-12-24")),
        ] {
            let q = quote(
                &terms,
                Request {
                    schedule,
                    party_size: 7,
                },
            )
            .unwrap();

            assert_eq!(q.units, 1);
            assert_eq!(q.total, usd("45.50"));
        }
    }

    #[test]
    fn rental_is_priced_per_unit_and_day() {
        let terms = Terms {
            available: true,
            capacity: Capacity::Bounded(5),
            rate: Rate::PerUnitDay(usd("25.00")),
        };

        let q = quote(
            &terms,
            Request {
                schedule: range("2025-01-10", "2025-01-13"),
                party_size: 2,
            },
        )
        .unwrap();

        assert_eq!(q.units, 6);
        assert_eq!(q.total, usd("150.00"));
    }

    #[test]
    fn prices_long_bulk_rental_exactly() {
        let terms = Terms {
            available: true,
            capacity: Capacity::Bounded(u16::MAX),
            rate: Rate::PerUnitDay(usd("99999999.99")),
        };

        let q = quote(
            &terms,
            Request {
                schedule: range("2025-01-10", "2035-01-10"),
                party_size: u16::MAX,
            },
        )
        .unwrap();

        assert_eq!(q.units, 3652 * 65535);
        assert_eq!(q.total, usd("23933381997606661.80"));
    }

    #[test]
    fn unbounded_capacity_still_needs_someone() {
        let terms = Terms {
            available: true,
            capacity: Capacity::Unbounded,
            rate: Rate::Flat(usd("199")),
        };
        let request = |party_size| Request {
            schedule: Schedule::SingleDate(date("2025-01-01")),
            party_size,
        };

        assert!(quote(&terms, request(1)).is_ok());
        assert!(quote(&terms, request(u16::MAX)).is_ok());
        let err = quote(&terms, request(0)).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                capacity: Capacity::Unbounded,
                party_size: 0,
            },
        );
        assert_eq!(err.to_string(), "Party size must be at least 1");
    }

    #[test]
    fn rounds_total_half_up() {
        let terms = Terms {
            rate: Rate::PerNight(usd("33.335")),
            ..cabin()
        };

        let q = quote(
            &terms,
            Request {
                schedule: range("2025-06-01", "2025-06-02"),
                party_size: 1,
            },
        )
        .unwrap();

        assert_eq!(q.total, usd("33.34"));
    }

    #[test]
    fn requires_authentication_regardless_of_request() {
        let unavailable = Terms {
            available: false,
            ..cabin()
        };

        for (terms, request) in [
            (
                cabin(),
                Request {
                    schedule: range("2025-06-01", "2025-06-04"),
                    party_size: 2,
                },
            ),
            (
                unavailable,
                Request {
                    schedule: range("2025-06-04", "2025-06-01"),
                    party_size: 0,
                },
            ),
            (
                cabin(),
                Request {
                    schedule: Schedule::DateRange {
                        start: None,
                        end: None,
                    },
                    party_size: 100,
                },
            ),
        ] {
            assert_eq!(
                validate_and_price(None, &terms, request),
                Err(Error::NotAuthenticated),
            );
        }
    }
}
