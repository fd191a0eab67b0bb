//! [`Purchase`]-related definitions.

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

/// [`Booking`] of an [`api::catalog::Pass`] purchase.
#[derive(Clone, Debug)]
pub struct Purchase {
    /// Underlying [`domain::booking::Purchase`].
    booking: domain::booking::Purchase,

    /// Pass this [`Booking`] is made for.
    pass: OnceCell<api::catalog::Pass>,
}

impl From<domain::booking::Purchase> for Purchase {
    fn from(booking: domain::booking::Purchase) -> Self {
        Self {
            booking,
            pass: OnceCell::new(),
        }
    }
}

/// `Booking` of an `ActivityPass` purchase.
#[graphql_object(
    name = "PassPurchase",
    context = Context,
    impl = BookingValue,
)]
impl Purchase {
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

    /// Day the `ActivityPass` was purchased on.
    pub fn purchase_date(&self) -> Date {
        self.booking.purchase_date
    }

    /// First day the `ActivityPass` is valid on.
    pub fn start_date(&self) -> Date {
        self.booking.start_date
    }

    /// Last day the `ActivityPass` is valid on.
    pub fn end_date(&self) -> Option<Date> {
        Some(self.booking.end_date)
    }

    /// Always `1`, as a single pass is purchased at a time.
    pub fn party_size(&self) -> i32 {
        1
    }

    /// `DateTime` when this `Booking` was made.
    pub fn created_at(&self) -> DateTime {
        self.booking.created_at.coerce()
    }

    /// `ActivityPass` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "PassPurchase.pass",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn pass(
        &self,
        ctx: &Context,
    ) -> Result<&api::catalog::Pass, Error> {
        let id = self.booking.pass_id;
        self.pass
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::catalog::PassById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|p| {
                        future::ready(
                            p.map(Into::into)
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
