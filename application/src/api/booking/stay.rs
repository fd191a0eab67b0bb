//! [`Stay`]-related definitions.

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

/// [`Booking`] of a stay at an [`api::catalog::Accommodation`].
#[derive(Clone, Debug)]
pub struct Stay {
    /// Underlying [`domain::booking::Stay`].
    booking: domain::booking::Stay,

    /// Accommodation this [`Booking`] is made for.
    accommodation: OnceCell<api::catalog::Accommodation>,
}

impl From<domain::booking::Stay> for Stay {
    fn from(booking: domain::booking::Stay) -> Self {
        Self {
            booking,
            accommodation: OnceCell::new(),
        }
    }
}

/// `Booking` of a stay at an `Accommodation`.
#[graphql_object(
    name = "AccommodationBooking",
    context = Context,
    impl = BookingValue,
)]
impl Stay {
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

    /// Day of arrival.
    pub fn check_in_date(&self) -> Date {
        self.booking.check_in_date
    }

    /// Day of departure.
    pub fn check_out_date(&self) -> Date {
        self.booking.check_out_date
    }

    /// First day of this `Booking`.
    pub fn start_date(&self) -> Date {
        self.booking.check_in_date
    }

    /// Last day of this `Booking`.
    pub fn end_date(&self) -> Option<Date> {
        Some(self.booking.check_out_date)
    }

    /// Number of guests.
    pub fn guests(&self) -> i32 {
        self.booking.guests.into()
    }

    /// Number of people or units this `Booking` is made for.
    pub fn party_size(&self) -> i32 {
        self.booking.guests.into()
    }

    /// `DateTime` when this `Booking` was made.
    pub fn created_at(&self) -> DateTime {
        self.booking.created_at.coerce()
    }

    /// `Accommodation` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "AccommodationBooking.accommodation",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn accommodation(
        &self,
        ctx: &Context,
    ) -> Result<&api::catalog::Accommodation, Error> {
        let id = self.booking.accommodation_id;
        self.accommodation
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::catalog::AccommodationById::by(id))
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
