//! [`Location`]-related definitions.

use std::future;

use common::DateTime;
use derive_more::{Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, define_error, AsError, Context, Error};

/// Resort location catalog items are offered at.
#[derive(Clone, Debug)]
pub struct Location {
    /// ID of this [`Location`].
    id: Id,

    /// Underlying [`domain::Location`].
    location: OnceCell<domain::Location>,
}

impl From<domain::Location> for Location {
    fn from(location: domain::Location) -> Self {
        Self {
            id: location.id.into(),
            location: OnceCell::new_with(Some(location)),
        }
    }
}

impl Location {
    /// Creates a new [`Location`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Location`] with the provided ID exists,
    /// otherwise accessing this [`Location`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            location: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Location`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Location`] doesn't exist.
    async fn location(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Location, Error> {
        let id = self.id.into();
        self.location
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::location::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|l| {
                        future::ready(
                            l.ok_or_else(|| LocationError::NotExists.into())
                                .map_err(ctx.error()),
                        )
                    })
            })
            .await
    }
}

/// Resort location catalog items are offered at.
#[graphql_object(context = Context)]
impl Location {
    /// Unique identifier of this `Location`.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Name of this `Location`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Location.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn name(&self, ctx: &Context) -> Result<String, Error> {
        Ok(self.location(ctx).await?.name.to_string())
    }

    /// Description of this `Location`.
    pub async fn description(
        &self,
        ctx: &Context,
    ) -> Result<Option<String>, Error> {
        Ok(self
            .location(ctx)
            .await?
            .description
            .as_ref()
            .map(ToString::to_string))
    }

    /// Street address of this `Location`.
    pub async fn address(
        &self,
        ctx: &Context,
    ) -> Result<Option<String>, Error> {
        Ok(self.location(ctx).await?.address.clone())
    }

    /// City of this `Location`.
    pub async fn city(&self, ctx: &Context) -> Result<String, Error> {
        Ok(self.location(ctx).await?.city.clone())
    }

    /// Country of this `Location`.
    pub async fn country(&self, ctx: &Context) -> Result<String, Error> {
        Ok(self.location(ctx).await?.country.clone())
    }

    /// URL of a picture of this `Location`.
    pub async fn image_url(
        &self,
        ctx: &Context,
    ) -> Result<Option<String>, Error> {
        Ok(self
            .location(ctx)
            .await?
            .image_url
            .as_ref()
            .map(ToString::to_string))
    }

    /// `DateTime` when this `Location` was added.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.location(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Location`.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::location::Id)]
#[into(domain::location::Id)]
#[graphql(name = "LocationId", transparent)]
pub struct Id(Uuid);

define_error! {
    enum LocationError {
        #[code = "LOCATION_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Location` with the provided ID does not exist"]
        NotExists,
    }
}
