//! [`Booking`]-related definitions.

mod enrollment;
mod participation;
mod purchase;
mod rental;
mod stay;

use common::{Date, DateTime, Money};
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLInterface, GraphQLScalar};
use service::{
    command,
    domain::{self, booking::pricing},
    query,
};
use uuid::Uuid;

use crate::{api, context::AuthError, define_error, AsError, Context, Error};

pub use self::{
    enrollment::Enrollment, participation::Participation, purchase::Purchase,
    rental::Rental, stay::Stay,
};

/// Booking of a catalog item made by a user.
#[derive(Clone, Debug, GraphQLInterface)]
#[graphql(
    context = Context,
    for = [Stay, Participation, Enrollment, Rental, Purchase],
)]
pub struct Booking {
    /// Unique identifier of the `Booking`.
    id: Id,

    /// Status of the `Booking`.
    status: Status,

    /// Total price of the `Booking`.
    total_price: Money,

    /// First day of the `Booking`.
    start_date: Date,

    /// Last day of the `Booking`, if it spans a date range.
    end_date: Option<Date>,

    /// Number of people or units the `Booking` is made for.
    party_size: i32,

    /// `DateTime` when the `Booking` was made.
    created_at: DateTime,
}

impl From<domain::Booking> for BookingValue {
    fn from(booking: domain::Booking) -> Self {
        use domain::Booking as B;
        match booking {
            B::Stay(b) => Self::Stay(b.into()),
            B::Participation(b) => Self::Participation(b.into()),
            B::Enrollment(b) => Self::Enrollment(b.into()),
            B::Rental(b) => Self::Rental(b.into()),
            B::Purchase(b) => Self::Purchase(b.into()),
        }
    }
}

/// Unique identifier of a `Booking`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::booking::Id)]
#[into(domain::booking::Id)]
#[graphql(name = "BookingId", transparent)]
pub struct Id(Uuid);

/// Status of a `Booking`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "BookingStatus")]
pub enum Status {
    /// `Booking` awaits confirmation.
    Pending,

    /// `Booking` is confirmed.
    Confirmed,

    /// `Booking` is cancelled.
    Cancelled,

    /// Rented equipment is returned.
    Returned,
}

impl From<domain::booking::Status> for Status {
    fn from(status: domain::booking::Status) -> Self {
        use domain::booking::Status as S;
        match status {
            S::Pending => Self::Pending,
            S::Confirmed => Self::Confirmed,
            S::Cancelled => Self::Cancelled,
            S::Returned => Self::Returned,
        }
    }
}

/// Price preview of a booking request.
#[derive(Clone, Copy, Debug, From)]
pub struct Quote(pricing::Quote);

/// Price preview of a booking request.
#[graphql_object(name = "BookingQuote", context = Context)]
impl Quote {
    /// First day of the booking.
    pub fn start_date(&self) -> Date {
        self.0.span.start()
    }

    /// Last day of the booking, if it spans a date range.
    pub fn end_date(&self) -> Option<Date> {
        match self.0.span {
            pricing::Span::Range { end, .. } => Some(end),
            pricing::Span::Day(_) => None,
        }
    }

    /// Number of people or units the booking is made for.
    pub fn party_size(&self) -> i32 {
        self.0.party_size.into()
    }

    /// Number of billed units (nights, unit-days, or `1` for flat fees).
    pub fn units(&self) -> i32 {
        i32::try_from(self.0.units).unwrap_or(i32::MAX)
    }

    /// Price of a single billed unit.
    pub fn unit_price(&self) -> Money {
        self.0.unit_price
    }

    /// Total price, rounded to cents.
    pub fn total(&self) -> Money {
        self.0.total
    }
}

/// Converts the provided GraphQL party size into a domain one.
///
/// Negative values are treated as an empty party, and values not fitting into
/// [`u16`] saturate, so they are rejected by capacity checks.
pub(crate) fn party_size(n: i32) -> u16 {
    u16::try_from(n.max(0)).unwrap_or(u16::MAX)
}

define_error! {
    enum BookingError {
        #[code = "ITEM_UNAVAILABLE"]
        #[status = CONFLICT]
        #[message = "This item is not available for booking"]
        ItemUnavailable,

        #[code = "MISSING_DATES"]
        #[status = BAD_REQUEST]
        #[message = "Please select start and end dates"]
        MissingDates,

        #[code = "INVALID_DATE_RANGE"]
        #[status = BAD_REQUEST]
        #[message = "End date must be after start date"]
        InvalidDateRange,

        #[code = "CAPACITY_EXCEEDED"]
        #[status = BAD_REQUEST]
        #[message = "Party size exceeds the maximum capacity"]
        CapacityExceeded,

        #[code = "ALREADY_BOOKED"]
        #[status = CONFLICT]
        #[message = "This item is already booked for the selected dates"]
        AlreadyBooked,

        #[code = "OUT_OF_STOCK"]
        #[status = CONFLICT]
        #[message = "Not enough units left for the selected dates"]
        OutOfStock,

        #[code = "PERSISTENCE_FAILURE"]
        #[status = INTERNAL_SERVER_ERROR]
        #[message = "Failed to create booking. Please try again."]
        PersistenceFailure,
    }
}

impl AsError for pricing::Error {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::NotAuthenticated => AuthError::AuthorizationRequired.into(),
            Self::ItemUnavailable => BookingError::ItemUnavailable.into(),
            Self::MissingDates => BookingError::MissingDates.into(),
            Self::InvalidDateRange => BookingError::InvalidDateRange.into(),
            Self::CapacityExceeded { .. } => {
                Error::from(BookingError::CapacityExceeded)
                    .with_message(self.to_string())
            }
        })
    }
}

impl AsError for command::create_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(_) => Some(BookingError::PersistenceFailure.into()),
            Self::Rejected(e) => e.try_as_error(),
            Self::ItemNotExists(_) => {
                Some(api::catalog::ItemError::NotExists.into())
            }
            Self::AlreadyBooked(_) => Some(BookingError::AlreadyBooked.into()),
            Self::OutOfStock { remaining, .. } => Some(
                Error::from(BookingError::OutOfStock).with_message(format!(
                    "Only {remaining} unit(s) left for the selected dates",
                )),
            ),
        }
    }
}

impl AsError for query::quote_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Rejected(e) => e.try_as_error(),
            Self::ItemNotExists(_) => {
                Some(api::catalog::ItemError::NotExists.into())
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use service::{
        command::create_booking::ExecutionError,
        domain::{
            booking::pricing::{self, Capacity},
            catalog,
        },
    };

    use crate::AsError as _;

    use super::party_size;

    fn item_ref() -> catalog::Ref {
        catalog::Ref {
            kind: catalog::Kind::Equipment,
            id: catalog::Id::new(),
        }
    }

    #[test]
    fn validation_errors_have_codes() {
        let cases = [
            (pricing::Error::NotAuthenticated, "AUTHORIZATION_REQUIRED", 401),
            (pricing::Error::ItemUnavailable, "ITEM_UNAVAILABLE", 409),
            (pricing::Error::MissingDates, "MISSING_DATES", 400),
            (pricing::Error::InvalidDateRange, "INVALID_DATE_RANGE", 400),
        ];
        for (err, code, status) in cases {
            let err = err.as_error();
            assert_eq!(err.code, code);
            assert_eq!(err.status_code.as_u16(), status);
        }
    }

    #[test]
    fn capacity_error_names_the_limit() {
        let err = pricing::Error::CapacityExceeded {
            capacity: Capacity::Bounded(4),
            party_size: 9,
        }
        .as_error();
        assert_eq!(err.code, "CAPACITY_EXCEEDED");
        assert_eq!(err.message, "Maximum capacity is 4");

        let err = pricing::Error::CapacityExceeded {
            capacity: Capacity::Unbounded,
            party_size: 0,
        }
        .as_error();
        assert_eq!(err.code, "CAPACITY_EXCEEDED");
        assert_eq!(err.message, "Party size must be at least 1");
    }

    #[test]
    fn command_errors_have_codes() {
        let err = ExecutionError::OutOfStock {
            item: item_ref(),
            remaining: 2,
        }
        .as_error();
        assert_eq!(err.code, "OUT_OF_STOCK");
        assert_eq!(err.message, "Only 2 unit(s) left for the selected dates");

        let err = ExecutionError::Rejected(pricing::Error::MissingDates)
            .as_error();
        assert_eq!(err.message, "Please select start and end dates");

        let err = ExecutionError::ItemNotExists(item_ref()).as_error();
        assert_eq!(err.code, "ITEM_NOT_EXISTS");
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn party_size_saturates() {
        assert_eq!(party_size(3), 3);
        assert_eq!(party_size(-1), 0);
        assert_eq!(party_size(70_000), u16::MAX);
    }
}
