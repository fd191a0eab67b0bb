//! [`Enrollment`]-related definitions.

use std::future;

use common::{Date, DateTime, Money};
use futures::TryFutureExt as _;
use juniper::graphql_object;
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;

#[cfg(doc)]
use crate::api::Booking;
use crate::{api, AsError, Context, Error};

use super::{BookingValue, Id, Status};

/// [`Booking`] of an enrollment in an [`api::catalog::SportsSchool`]
/// course.
#[derive(Clone, Debug)]
pub struct Enrollment {
    /// Underlying [`domain::booking::Enrollment`].
    booking: domain::booking::Enrollment,

    /// SportsSchool this [`Booking`] is made for.
    sports_school: OnceCell<api::catalog::SportsSchool>,
}

impl From<domain::booking::Enrollment> for Enrollment {
    fn from(booking: domain::booking::Enrollment) -> Self {
        Self {
            booking,
            sports_school: OnceCell::new(),
        }
    }
}

/// `Booking` of an enrollment in a `SportsSchool` course.
#[graphql_object(
    name = "SportsSchoolBooking",
    context = Context,
    impl = BookingValue,
)]
impl Enrollment {
    /// Unique identifier of this `Booking`.
    pub fn id(&self) -> Id {
        self.booking.id.into()
    }

    /// Status of this `Booking`.
    pub fn status(&self) -> Status {
        self.booking.status.into()
    }

    /// Total price of this `Booking`.
    pub fn total_price(&self) -> Money {
        self.booking.total_price
    }

    /// First day of this `Booking`.
    pub fn start_date(&self) -> Date {
        self.booking.start_date
    }

    /// Last day of this `Booking`, if it spans a date range.
    pub fn end_date(&self) -> Option<Date> {
        None
    }

    /// Number of students.
    pub fn students(&self) -> i32 {
        self.booking.students.into()
    }

    /// Number of people or units this `Booking` is made for.
    pub fn party_size(&self) -> i32 {
        self.booking.students.into()
    }

    /// `DateTime` when this `Booking` was made.
    pub fn created_at(&self) -> DateTime {
        self.booking.created_at.coerce()
    }

    /// `SportsSchool` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SportsSchoolBooking.sportsSchool",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn sports_school(
        &self,
        ctx: &Context,
    ) -> Result<&api::catalog::SportsSchool, Error> {
        let id = self.booking.sports_school_id;
        self.sports_school
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::catalog::SportsSchoolById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|i| {
                        future::ready(
                            i.map(Into::into)
                                .ok_or_else(|| {
                                    api::catalog::ItemError::NotExists.into()
                                })
                                .map_err(ctx.error()),
                        )
                    })
            })
            .await
    }
}
