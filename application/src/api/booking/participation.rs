//! [`Participation`]-related definitions.

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

/// [`Booking`] of a participation in an [`api::catalog::Activity`].
#[derive(Clone, Debug)]
pub struct Participation {
    /// Underlying [`domain::booking::Participation`].
    booking: domain::booking::Participation,

    /// Activity this [`Booking`] is made for.
    activity: OnceCell<api::catalog::Activity>,
}

impl From<domain::booking::Participation> for Participation {
    fn from(booking: domain::booking::Participation) -> Self {
        Self {
            booking,
            activity: OnceCell::new(),
        }
    }
}

/// `Booking` of a participation in an `Activity`.
#[graphql_object(
    name = "ActivityBooking",
    context = Context,
    impl = BookingValue,
)]
impl Participation {
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

    /// Day of the `Activity`.
    pub fn booking_date(&self) -> Date {
        self.booking.booking_date
    }

    /// First day of this `Booking`.
    pub fn start_date(&self) -> Date {
        self.booking.booking_date
    }

    /// Last day of this `Booking`, if it spans a date range.
    pub fn end_date(&self) -> Option<Date> {
        None
    }

    /// Number of participants.
    pub fn participants(&self) -> i32 {
        self.booking.participants.into()
    }

    /// Number of people or units this `Booking` is made for.
    pub fn party_size(&self) -> i32 {
        self.booking.participants.into()
    }

    /// `DateTime` when this `Booking` was made.
    pub fn created_at(&self) -> DateTime {
        self.booking.created_at.coerce()
    }

    /// `Activity` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "ActivityBooking.activity",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn activity(
        &self,
        ctx: &Context,
    ) -> Result<&api::catalog::Activity, Error> {
        let id = self.booking.activity_id;
        self.activity
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::catalog::ActivityById::by(id))
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
