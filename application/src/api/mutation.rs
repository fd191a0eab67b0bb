//! GraphQL [`Mutation`]s definitions.

use common::Date;
use juniper::graphql_object;
use service::{command, domain::booking, Command as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";

    /// Books by the provided [`booking::Request`] on behalf of the currently
    /// authenticated user, if any.
    async fn book(
        request: booking::Request,
        ctx: &Context,
    ) -> Result<api::BookingValue, Error> {
        let user_id = ctx.try_current_session().await?.map(|s| s.user_id);

        ctx.service()
            .execute(command::CreateBooking {
                user_id: user_id.map(Into::into),
                request,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Possible error codes of every booking `Mutation`:
/// - `AUTHORIZATION_REQUIRED` - the request carries no valid access token;
/// - `ITEM_NOT_EXISTS` - the booked item does not exist;
/// - `ITEM_UNAVAILABLE` - the booked item cannot be booked;
/// - `CAPACITY_EXCEEDED` - the party is empty or too large for the booked
///   item;
/// - `PERSISTENCE_FAILURE` - the booking could not be stored.
#[graphql_object(context = Context)]
impl Mutation {
    /// Books a stay at an `Accommodation`.
    ///
    /// # Errors
    ///
    /// Additional error codes:
    /// - `MISSING_DATES` - either of the dates is not selected;
    /// - `INVALID_DATE_RANGE` - `checkOut` is not after `checkIn`;
    /// - `ALREADY_BOOKED` - the `Accommodation` is booked for an overlapping
    ///                      period.
    #[tracing::instrument(
        skip_all,
        fields(
            accommodation.id = %accommodation_id,
            check_in = ?check_in,
            check_out = ?check_out,
            gql.name = "bookAccommodation",
            guests = guests,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn book_accommodation(
        accommodation_id: api::catalog::Id,
        check_in: Option<Date>,
        check_out: Option<Date>,
        guests: i32,
        ctx: &Context,
    ) -> Result<api::BookingValue, Error> {
        let request = booking::Request::Stay {
            accommodation_id: accommodation_id.into(),
            check_in,
            check_out,
            guests: api::booking::party_size(guests),
        };
        Self::book(request, ctx).await
    }

    /// Books a participation in an `Activity`.
    #[tracing::instrument(
        skip_all,
        fields(
            activity.id = %activity_id,
            date = %date,
            gql.name = "bookActivity",
            otel.name = Self::SPAN_NAME,
            participants = participants,
        ),
    )]
    pub async fn book_activity(
        activity_id: api::catalog::Id,
        date: Date,
        participants: i32,
        ctx: &Context,
    ) -> Result<api::BookingValue, Error> {
        let request = booking::Request::Participation {
            activity_id: activity_id.into(),
            date,
            participants: api::booking::party_size(participants),
        };
        Self::book(request, ctx).await
    }

    /// Enrolls students in a `SportsSchool` course.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "enrollInSportsSchool",
            otel.name = Self::SPAN_NAME,
            sports_school.id = %sports_school_id,
            start_date = %start_date,
            students = students,
        ),
    )]
    pub async fn enroll_in_sports_school(
        sports_school_id: api::catalog::Id,
        start_date: Date,
        students: i32,
        ctx: &Context,
    ) -> Result<api::BookingValue, Error> {
        let request = booking::Request::Enrollment {
            sports_school_id: sports_school_id.into(),
            start_date,
            students: api::booking::party_size(students),
        };
        Self::book(request, ctx).await
    }

    /// Rents `Equipment` for a date range.
    ///
    /// # Errors
    ///
    /// Additional error codes:
    /// - `MISSING_DATES` - either of the dates is not selected;
    /// - `INVALID_DATE_RANGE` - `rentalEnd` is not after `rentalStart`;
    /// - `OUT_OF_STOCK` - not enough units left for the selected dates.
    #[tracing::instrument(
        skip_all,
        fields(
            equipment.id = %equipment_id,
            gql.name = "rentEquipment",
            otel.name = Self::SPAN_NAME,
            quantity = quantity,
            rental_end = ?rental_end,
            rental_start = ?rental_start,
        ),
    )]
    pub async fn rent_equipment(
        equipment_id: api::catalog::Id,
        rental_start: Option<Date>,
        rental_end: Option<Date>,
        quantity: i32,
        ctx: &Context,
    ) -> Result<api::BookingValue, Error> {
        let request = booking::Request::Rental {
            equipment_id: equipment_id.into(),
            start: rental_start,
            end: rental_end,
            quantity: api::booking::party_size(quantity),
        };
        Self::book(request, ctx).await
    }

    /// Purchases an `ActivityPass` valid from the specified day.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "purchasePass",
            otel.name = Self::SPAN_NAME,
            pass.id = %pass_id,
            start_date = %start_date,
        ),
    )]
    pub async fn purchase_pass(
        pass_id: api::catalog::Id,
        start_date: Date,
        ctx: &Context,
    ) -> Result<api::BookingValue, Error> {
        let request = booking::Request::Purchase {
            pass_id: pass_id.into(),
            start_date,
        };
        Self::book(request, ctx).await
    }
}
