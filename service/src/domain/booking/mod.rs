//! [`Booking`] definitions.

pub mod enrollment;
pub mod participation;
pub mod pricing;
pub mod purchase;
pub mod rental;
pub mod stay;

use common::{define_kind, unit, Date, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{catalog, user};

pub use self::{
    enrollment::Enrollment, participation::Participation,
    pricing::PricedBooking, purchase::Purchase, rental::Rental, stay::Stay,
};

/// Booking of a catalog item by a user.
#[derive(Clone, Debug, From)]
pub enum Booking {
    #[doc(hidden)]
    Stay(Stay),
    #[doc(hidden)]
    Participation(Participation),
    #[doc(hidden)]
    Enrollment(Enrollment),
    #[doc(hidden)]
    Rental(Rental),
    #[doc(hidden)]
    Purchase(Purchase),
}

impl Booking {
    /// Creates a new [`Booking`] of the provided `item` out of its
    /// [`PricedBooking`].
    ///
    /// # Errors
    ///
    /// [`pricing::Error::InvalidDateRange`] if a [`catalog::Pass`] would end
    /// beyond the supported calendar.
    pub fn new(
        item: &catalog::Item,
        priced: PricedBooking,
    ) -> Result<Self, pricing::Error> {
        let PricedBooking {
            user_id,
            quote,
            status,
        } = priced;
        let id = Id::new();
        let (start, end) = quote.span.bounds();
        let total_price = quote.total;
        let created_at = CreationDateTime::now();

        Ok(match item {
            catalog::Item::Accommodation(a) => Self::Stay(Stay {
                id,
                user_id,
                accommodation_id: a.id,
                check_in_date: start,
                check_out_date: end,
                guests: quote.party_size,
                total_price,
                status,
                created_at,
            }),
            catalog::Item::Activity(a) => Self::Participation(Participation {
                id,
                user_id,
                activity_id: a.id,
                booking_date: start,
                participants: quote.party_size,
                total_price,
                status,
                created_at,
            }),
            catalog::Item::SportsSchool(s) => Self::Enrollment(Enrollment {
                id,
                user_id,
                sports_school_id: s.id,
                start_date: start,
                students: quote.party_size,
                total_price,
                status,
                created_at,
            }),
            catalog::Item::Equipment(e) => Self::Rental(Rental {
                id,
                user_id,
                equipment_id: e.id,
                rental_start_date: start,
                rental_end_date: end,
                quantity: quote.party_size,
                total_price,
                status,
                created_at,
            }),
            catalog::Item::Pass(p) => Self::Purchase(Purchase {
                id,
                user_id,
                pass_id: p.id,
                purchase_date: created_at.date(),
                start_date: start,
                end_date: start
                    .checked_add_days(p.duration_days)
                    .ok_or(pricing::Error::InvalidDateRange)?,
                total_price,
                status,
                created_at,
            }),
        })
    }

    /// Returns ID of this [`Booking`].
    #[must_use]
    pub fn id(&self) -> Id {
        match self {
            Self::Stay(b) => b.id,
            Self::Participation(b) => b.id,
            Self::Enrollment(b) => b.id,
            Self::Rental(b) => b.id,
            Self::Purchase(b) => b.id,
        }
    }

    /// Returns ID of the user this [`Booking`] belongs to.
    #[must_use]
    pub fn user_id(&self) -> user::Id {
        match self {
            Self::Stay(b) => b.user_id,
            Self::Participation(b) => b.user_id,
            Self::Enrollment(b) => b.user_id,
            Self::Rental(b) => b.user_id,
            Self::Purchase(b) => b.user_id,
        }
    }

    /// Returns [`catalog::Ref`] to the item this [`Booking`] is about.
    #[must_use]
    pub fn item(&self) -> catalog::Ref {
        use catalog::Kind as K;

        let (kind, id) = match self {
            Self::Stay(b) => (K::Accommodation, b.accommodation_id),
            Self::Participation(b) => (K::Activity, b.activity_id),
            Self::Enrollment(b) => (K::SportsSchool, b.sports_school_id),
            Self::Rental(b) => (K::Equipment, b.equipment_id),
            Self::Purchase(b) => (K::Pass, b.pass_id),
        };
        catalog::Ref { kind, id }
    }

    /// Returns the first day of this [`Booking`].
    #[must_use]
    pub fn start_date(&self) -> Date {
        match self {
            Self::Stay(b) => b.check_in_date,
            Self::Participation(b) => b.booking_date,
            Self::Enrollment(b) => b.start_date,
            Self::Rental(b) => b.rental_start_date,
            Self::Purchase(b) => b.start_date,
        }
    }

    /// Returns the day this [`Booking`] ends on, if it spans several days.
    #[must_use]
    pub fn end_date(&self) -> Option<Date> {
        match self {
            Self::Stay(b) => Some(b.check_out_date),
            Self::Rental(b) => Some(b.rental_end_date),
            Self::Purchase(b) => Some(b.end_date),
            Self::Participation(_) | Self::Enrollment(_) => None,
        }
    }

    /// Returns the number of guests, participants, students or units of this
    /// [`Booking`].
    #[must_use]
    pub fn party_size(&self) -> u16 {
        match self {
            Self::Stay(b) => b.guests,
            Self::Participation(b) => b.participants,
            Self::Enrollment(b) => b.students,
            Self::Rental(b) => b.quantity,
            Self::Purchase(_) => 1,
        }
    }

    /// Returns the total price of this [`Booking`].
    #[must_use]
    pub fn total_price(&self) -> Money {
        match self {
            Self::Stay(b) => b.total_price,
            Self::Participation(b) => b.total_price,
            Self::Enrollment(b) => b.total_price,
            Self::Rental(b) => b.total_price,
            Self::Purchase(b) => b.total_price,
        }
    }

    /// Returns [`Status`] of this [`Booking`].
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Stay(b) => b.status,
            Self::Participation(b) => b.status,
            Self::Enrollment(b) => b.status,
            Self::Rental(b) => b.status,
            Self::Purchase(b) => b.status,
        }
    }

    /// Returns [`DateTime`] when this [`Booking`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    #[must_use]
    pub fn created_at(&self) -> CreationDateTime {
        match self {
            Self::Stay(b) => b.created_at,
            Self::Participation(b) => b.created_at,
            Self::Enrollment(b) => b.created_at,
            Self::Rental(b) => b.created_at,
            Self::Purchase(b) => b.created_at,
        }
    }
}

/// Booking request of a user, one per kind of catalog item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Request {
    /// Stay at a [`catalog::Accommodation`].
    Stay {
        /// ID of the [`catalog::Accommodation`] to stay at.
        accommodation_id: catalog::Id,

        /// Day of arrival, if selected.
        check_in: Option<Date>,

        /// Day of departure, if selected.
        check_out: Option<Date>,

        /// Number of guests.
        guests: u16,
    },

    /// Participation in a [`catalog::Activity`].
    Participation {
        /// ID of the [`catalog::Activity`] to participate in.
        activity_id: catalog::Id,

        /// Day of the [`catalog::Activity`].
        date: Date,

        /// Number of participants.
        participants: u16,
    },

    /// Enrollment in a [`catalog::SportsSchool`] course.
    Enrollment {
        /// ID of the [`catalog::SportsSchool`] to enroll in.
        sports_school_id: catalog::Id,

        /// First day of the course.
        start_date: Date,

        /// Number of students.
        students: u16,
    },

    /// Rental of [`catalog::Equipment`].
    Rental {
        /// ID of the [`catalog::Equipment`] to rent.
        equipment_id: catalog::Id,

        /// Day of pick-up, if selected.
        start: Option<Date>,

        /// Day of return, if selected.
        end: Option<Date>,

        /// Number of units.
        quantity: u16,
    },

    /// Purchase of a [`catalog::Pass`].
    Purchase {
        /// ID of the [`catalog::Pass`] to purchase.
        pass_id: catalog::Id,

        /// First day the [`catalog::Pass`] is valid on.
        start_date: Date,
    },
}

impl Request {
    /// Returns [`catalog::Ref`] to the requested item.
    #[must_use]
    pub fn item(&self) -> catalog::Ref {
        use catalog::Kind as K;

        let (kind, id) = match *self {
            Self::Stay {
                accommodation_id, ..
            } => (K::Accommodation, accommodation_id),
            Self::Participation { activity_id, .. } => {
                (K::Activity, activity_id)
            }
            Self::Enrollment {
                sports_school_id, ..
            } => (K::SportsSchool, sports_school_id),
            Self::Rental { equipment_id, .. } => (K::Equipment, equipment_id),
            Self::Purchase { pass_id, .. } => (K::Pass, pass_id),
        };
        catalog::Ref { kind, id }
    }

    /// Returns the [`pricing::Request`] this [`Request`] is validated and
    /// priced as.
    #[must_use]
    pub fn pricing(&self) -> pricing::Request {
        use pricing::Schedule as S;

        let (schedule, party_size) = match *self {
            Self::Stay {
                check_in,
                check_out,
                guests,
                ..
            } => (
                S::DateRange {
                    start: check_in,
                    end: check_out,
                },
                guests,
            ),
            Self::Participation {
                date, participants, ..
            } => (S::SingleDate(date), participants),
            Self::Enrollment {
                start_date,
                students,
                ..
            } => (S::SingleDate(start_date), students),
            Self::Rental {
                start,
                end,
                quantity,
                ..
            } => (S::DateRange { start, end }, quantity),
            Self::Purchase { start_date, .. } => (S::SingleDate(start_date), 1),
        };
        pricing::Request {
            schedule,
            party_size,
        }
    }
}

/// ID of a [`Booking`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Status of a [`Booking`]."]
    #[case = "snake_case"]
    enum Status {
        #[doc = "[`Booking`] awaits confirmation."]
        Pending,

        #[doc = "[`Booking`] is confirmed."]
        Confirmed,

        #[doc = "[`Booking`] is cancelled."]
        Cancelled,

        #[doc = "Rented equipment is returned."]
        Returned,
    }
}

impl Status {
    /// Indicates whether a [`Booking`] of this [`Status`] holds the booked
    /// item.
    #[must_use]
    pub fn is_holding(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// [`DateTime`] when a [`Booking`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::{Currency, Money};
    use uuid::Uuid;

    use crate::domain::{
        catalog::{self, Pass, Season},
        location,
    };

    use super::{pricing, Booking, Request, Status};

    fn pass(duration_days: u16) -> catalog::Item {
        Pass {
            id: catalog::Id::new(),
            location_id: location::Id::from(Uuid::nil()),
            name: catalog::Name::new("Summit Pass").unwrap(),
            description: None,
            season: Season::Winter,
            duration_days,
            price: Money {
                amount: "199.00".parse().unwrap(),
                currency: Currency::Eur,
            },
            benefits: vec!["Lift access".into()],
            image_url: None,
            available: true,
            created_at: catalog::CreationDateTime::now(),
        }
        .into()
    }

    #[test]
    fn pass_purchase_ends_after_duration() {
        let item = pass(7);
        let request = Request::Purchase {
            pass_id: item.id(),
            start_date: "2025-01-10".parse().unwrap(),
        };
        let priced = pricing::validate_and_price(
            Some(Uuid::nil().into()),
            &item.terms(),
            request.pricing(),
        )
        .unwrap();

        let booking = Booking::new(&item, priced).unwrap();

        let Booking::Purchase(purchase) = &booking else {
            panic!("expected `Purchase`, got: {booking:?}");
        };
        assert_eq!(purchase.end_date, "2025-01-17".parse().unwrap());
        assert_eq!(booking.item(), request.item());
        assert_eq!(booking.party_size(), 1);
        assert_eq!(booking.status(), Status::Confirmed);
        assert_eq!(booking.total_price().to_string(), "199EUR");
    }

    #[test]
    fn stay_is_priced_as_date_range() {
        let id = catalog::Id::new();
        let request = Request::Stay {
            accommodation_id: id,
            check_in: None,
            check_out: Some("2025-06-04".parse().unwrap()),
            guests: 2,
        };

        assert_eq!(
            request.pricing().schedule.to_span(),
            Err(pricing::Error::MissingDates),
        );
        assert_eq!(request.item().kind, catalog::Kind::Accommodation);
        assert_eq!(request.item().id, id);
    }

    #[test]
    fn only_pending_and_confirmed_hold_items() {
        assert!(Status::Pending.is_holding());
        assert!(Status::Confirmed.is_holding());
        assert!(!Status::Cancelled.is_holding());
        assert!(!Status::Returned.is_holding());
    }
}
