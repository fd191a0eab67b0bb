//! GraphQL [`Query`]s definitions.

use common::Date;
use juniper::graphql_object;
use service::{domain::booking, query, read, Query as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";

    /// Prices the provided [`booking::Request`] without booking it.
    async fn quote(
        request: booking::Request,
        ctx: &Context,
    ) -> Result<api::booking::Quote, Error> {
        ctx.service()
            .execute(query::QuoteBooking { request })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

#[graphql_object(context = Context)]
impl Query {
    /// Lists available `Accommodation`s, cheapest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "accommodations",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn accommodations(
        #[graphql(name = "type")] kind: Option<api::catalog::AccommodationType>,
        ctx: &Context,
    ) -> Result<Vec<api::catalog::Accommodation>, Error> {
        let filter = read::catalog::AccommodationFilter {
            kind: kind.map(Into::into),
        };
        ctx.service()
            .execute(query::catalog::Accommodations::by(filter))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `Accommodation` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `Accommodation` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "accommodation",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn accommodation(
        id: api::catalog::Id,
        ctx: &Context,
    ) -> Result<api::catalog::Accommodation, Error> {
        ctx.service()
            .execute(query::catalog::AccommodationById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::catalog::ItemError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists available `Activity`s of the specified `Season`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "activities",
            otel.name = Self::SPAN_NAME,
            season = ?season,
        ),
    )]
    pub async fn activities(
        season: Option<api::catalog::Season>,
        ctx: &Context,
    ) -> Result<Vec<api::catalog::Activity>, Error> {
        ctx.service()
            .execute(query::catalog::Activities::by(season_filter(season)))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `Activity` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `Activity` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "activity",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn activity(
        id: api::catalog::Id,
        ctx: &Context,
    ) -> Result<api::catalog::Activity, Error> {
        ctx.service()
            .execute(query::catalog::ActivityById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::catalog::ItemError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists available `SportsSchool`s of the specified `Season`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "sportsSchools",
            otel.name = Self::SPAN_NAME,
            season = ?season,
        ),
    )]
    pub async fn sports_schools(
        season: Option<api::catalog::Season>,
        ctx: &Context,
    ) -> Result<Vec<api::catalog::SportsSchool>, Error> {
        ctx.service()
            .execute(query::catalog::SportsSchools::by(season_filter(season)))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `SportsSchool` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `SportsSchool` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "sportsSchool",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn sports_school(
        id: api::catalog::Id,
        ctx: &Context,
    ) -> Result<api::catalog::SportsSchool, Error> {
        ctx.service()
            .execute(query::catalog::SportsSchoolById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::catalog::ItemError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists in-stock `Equipment` of the specified `Season`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "equipment",
            otel.name = Self::SPAN_NAME,
            season = ?season,
        ),
    )]
    pub async fn equipment(
        season: Option<api::catalog::Season>,
        ctx: &Context,
    ) -> Result<Vec<api::catalog::Equipment>, Error> {
        ctx.service()
            .execute(query::catalog::EquipmentList::by(season_filter(season)))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `Equipment` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `Equipment` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "equipmentItem",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn equipment_item(
        id: api::catalog::Id,
        ctx: &Context,
    ) -> Result<api::catalog::Equipment, Error> {
        ctx.service()
            .execute(query::catalog::EquipmentById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::catalog::ItemError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists `ActivityPass`es on sale for the specified `Season`, cheapest
    /// first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "passes",
            otel.name = Self::SPAN_NAME,
            season = ?season,
        ),
    )]
    pub async fn passes(
        season: Option<api::catalog::Season>,
        ctx: &Context,
    ) -> Result<Vec<api::catalog::Pass>, Error> {
        ctx.service()
            .execute(query::catalog::Passes::by(season_filter(season)))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `ActivityPass` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `ActivityPass` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "pass",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn pass(
        id: api::catalog::Id,
        ctx: &Context,
    ) -> Result<api::catalog::Pass, Error> {
        ctx.service()
            .execute(query::catalog::PassById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::catalog::ItemError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Location` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LOCATION_NOT_EXISTS` - the `Location` does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "location",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn location(
        id: api::location::Id,
        ctx: &Context,
    ) -> Result<api::Location, Error> {
        ctx.service()
            .execute(query::location::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::location::LocationError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists all `Booking`s of the currently authenticated user, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request carries no valid access token.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myBookings",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_bookings(
        ctx: &Context,
    ) -> Result<Vec<api::BookingValue>, Error> {
        let my_id = ctx.current_session().await?.user_id;
        ctx.service()
            .execute(query::booking::ByUser::by(my_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Previews the price of staying at an `Accommodation`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `Accommodation` does not exist;
    /// - `ITEM_UNAVAILABLE` - the `Accommodation` cannot be booked;
    /// - `MISSING_DATES` - either of the dates is not selected;
    /// - `INVALID_DATE_RANGE` - `checkOut` is not after `checkIn`;
    /// - `CAPACITY_EXCEEDED` - no or too many `guests`.
    #[tracing::instrument(
        skip_all,
        fields(
            accommodation.id = %accommodation_id,
            check_in = ?check_in,
            check_out = ?check_out,
            gql.name = "quoteAccommodation",
            guests = guests,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn quote_accommodation(
        accommodation_id: api::catalog::Id,
        check_in: Option<Date>,
        check_out: Option<Date>,
        guests: i32,
        ctx: &Context,
    ) -> Result<api::booking::Quote, Error> {
        let request = booking::Request::Stay {
            accommodation_id: accommodation_id.into(),
            check_in,
            check_out,
            guests: api::booking::party_size(guests),
        };
        Self::quote(request, ctx).await
    }

    /// Previews the price of participating in an `Activity`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `Activity` does not exist;
    /// - `ITEM_UNAVAILABLE` - the `Activity` cannot be booked;
    /// - `CAPACITY_EXCEEDED` - no or too many `participants`.
    #[tracing::instrument(
        skip_all,
        fields(
            activity.id = %activity_id,
            date = %date,
            gql.name = "quoteActivity",
            otel.name = Self::SPAN_NAME,
            participants = participants,
        ),
    )]
    pub async fn quote_activity(
        activity_id: api::catalog::Id,
        date: Date,
        participants: i32,
        ctx: &Context,
    ) -> Result<api::booking::Quote, Error> {
        let request = booking::Request::Participation {
            activity_id: activity_id.into(),
            date,
            participants: api::booking::party_size(participants),
        };
        Self::quote(request, ctx).await
    }

    /// Previews the price of enrolling in a `SportsSchool` course.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `SportsSchool` does not exist;
    /// - `ITEM_UNAVAILABLE` - the `SportsSchool` accepts no enrollments;
    /// - `CAPACITY_EXCEEDED` - no or too many `students`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "quoteSportsSchool",
            otel.name = Self::SPAN_NAME,
            sports_school.id = %sports_school_id,
            start_date = %start_date,
            students = students,
        ),
    )]
    pub async fn quote_sports_school(
        sports_school_id: api::catalog::Id,
        start_date: Date,
        students: i32,
        ctx: &Context,
    ) -> Result<api::booking::Quote, Error> {
        let request = booking::Request::Enrollment {
            sports_school_id: sports_school_id.into(),
            start_date,
            students: api::booking::party_size(students),
        };
        Self::quote(request, ctx).await
    }

    /// Previews the price of renting `Equipment`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `Equipment` does not exist;
    /// - `MISSING_DATES` - either of the dates is not selected;
    /// - `INVALID_DATE_RANGE` - `rentalEnd` is not after `rentalStart`;
    /// - `CAPACITY_EXCEEDED` - no units or more than in stock requested.
    #[tracing::instrument(
        skip_all,
        fields(
            equipment.id = %equipment_id,
            gql.name = "quoteEquipment",
            otel.name = Self::SPAN_NAME,
            quantity = quantity,
            rental_end = ?rental_end,
            rental_start = ?rental_start,
        ),
    )]
    pub async fn quote_equipment(
        equipment_id: api::catalog::Id,
        rental_start: Option<Date>,
        rental_end: Option<Date>,
        quantity: i32,
        ctx: &Context,
    ) -> Result<api::booking::Quote, Error> {
        let request = booking::Request::Rental {
            equipment_id: equipment_id.into(),
            start: rental_start,
            end: rental_end,
            quantity: api::booking::party_size(quantity),
        };
        Self::quote(request, ctx).await
    }

    /// Previews the price of purchasing an `ActivityPass`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ITEM_NOT_EXISTS` - the `ActivityPass` does not exist;
    /// - `ITEM_UNAVAILABLE` - the `ActivityPass` is not on sale.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "quotePass",
            otel.name = Self::SPAN_NAME,
            pass.id = %pass_id,
            start_date = %start_date,
        ),
    )]
    pub async fn quote_pass(
        pass_id: api::catalog::Id,
        start_date: Date,
        ctx: &Context,
    ) -> Result<api::booking::Quote, Error> {
        let request = booking::Request::Purchase {
            pass_id: pass_id.into(),
            start_date,
        };
        Self::quote(request, ctx).await
    }
}

/// Builds a [`read::catalog::SeasonFilter`] out of the provided GraphQL
/// [`api::catalog::Season`].
fn season_filter(
    season: Option<api::catalog::Season>,
) -> read::catalog::SeasonFilter {
    read::catalog::SeasonFilter {
        season: season.map(Into::into),
    }
}
