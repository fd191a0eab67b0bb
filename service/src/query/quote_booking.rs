//! [`Query`] for pricing a booking request without booking it.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        booking::{self, pricing},
        catalog,
    },
    infra::{database, Database},
    Service,
};

use super::Query;

/// [`Query`] for a [`pricing::Quote`] of a [`booking::Request`].
///
/// Needs no authenticated user, so prices can be previewed before signing
/// in.
#[derive(Clone, Copy, Debug, From)]
pub struct QuoteBooking {
    /// [`booking::Request`] to price.
    pub request: booking::Request,
}

impl<Db> Query<QuoteBooking> for Service<Db>
where
    Db: Database<
        Select<By<Option<catalog::Item>, catalog::Ref>>,
        Ok = Option<catalog::Item>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = pricing::Quote;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        QuoteBooking { request }: QuoteBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let item_ref = request.item();
        let item = self
            .database()
            .execute(Select(By::<Option<catalog::Item>, _>::new(item_ref)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ItemNotExists(item_ref))
            .map_err(tracerr::wrap!())?;

        pricing::quote(&item.terms(), request.pricing())
            .map_err(tracerr::from_and_wrap!(=> E))
    }
}

/// Error of [`QuoteBooking`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`booking::Request`] doesn't satisfy the item's [`pricing::Terms`].
    #[display("Booking rejected: {_0}")]
    #[from]
    Rejected(pricing::Error),

    /// Requested item does not exist.
    #[display("`{_0}` does not exist")]
    ItemNotExists(#[error(not(source))] catalog::Ref),
}
