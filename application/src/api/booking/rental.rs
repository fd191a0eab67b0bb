//! [`Rental`]-related definitions.

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

/// [`Booking`] of an [`api::catalog::Equipment`] rental.
#[derive(Clone, Debug)]
pub struct Rental {
    /// Underlying [`domain::booking::Rental`].
    booking: domain::booking::Rental,

    /// Equipment this [`Booking`] is made for.
    equipment: OnceCell<api::catalog::Equipment>,
}

impl From<domain::booking::Rental> for Rental {
    fn from(booking: domain::booking::Rental) -> Self {
        Self {
            booking,
            equipment: OnceCell::new(),
        }
    }
}

/// `Booking` of an `Equipment` rental.
#[graphql_object(
    name = "EquipmentRental",
    context = Context,
    impl = BookingValue,
)]
impl Rental {
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

    /// Day of pick-up.
    pub fn rental_start_date(&self) -> Date {
        self.booking.rental_start_date
    }

    /// Day of return.
    pub fn rental_end_date(&self) -> Date {
        self.booking.rental_end_date
    }

    /// First day of this `Booking`.
    pub fn start_date(&self) -> Date {
        self.booking.rental_start_date
    }

    /// Last day of this `Booking`.
    pub fn end_date(&self) -> Option<Date> {
        Some(self.booking.rental_end_date)
    }

    /// Number of rented units.
    pub fn quantity(&self) -> i32 {
        self.booking.quantity.into()
    }

    /// Number of people or units this `Booking` is made for.
    pub fn party_size(&self) -> i32 {
        self.booking.quantity.into()
    }

    /// `DateTime` when this `Booking` was made.
    pub fn created_at(&self) -> DateTime {
        self.booking.created_at.coerce()
    }

    /// `Equipment` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "EquipmentRental.equipment",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn equipment(
        &self,
        ctx: &Context,
    ) -> Result<&api::catalog::Equipment, Error> {
        let id = self.booking.equipment_id;
        self.equipment
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::catalog::EquipmentById::by(id))
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
