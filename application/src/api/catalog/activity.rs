//! [`Activity`]-related definitions.

use common::{DateTime, Money};
use derive_more::From;
use juniper::graphql_object;
use service::domain;

use crate::{api, Context};

/// Guided activity.
#[derive(Clone, Debug, From)]
pub struct Activity(domain::catalog::Activity);

/// Guided activity, priced per booking.
#[graphql_object(context = Context)]
impl Activity {
    /// Unique identifier of this `Activity`.
    pub fn id(&self) -> api::catalog::Id {
        self.0.id.into()
    }

    /// Name of this `Activity`.
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// Description of this `Activity`.
    pub fn description(&self) -> Option<String> {
        self.0.description.as_ref().map(ToString::to_string)
    }

    /// `Season` this `Activity` is offered in.
    pub fn season(&self) -> api::catalog::Season {
        self.0.season.into()
    }

    /// Difficulty level of this `Activity`.
    pub fn difficulty_level(&self) -> Option<&str> {
        self.0.difficulty_level.as_deref()
    }

    /// Duration of this `Activity` in hours, as a decimal string.
    pub fn duration_hours(&self) -> Option<String> {
        self.0.duration_hours.map(|h| h.normalize().to_string())
    }

    /// Price of a booking.
    pub fn price(&self) -> Money {
        self.0.price
    }

    /// Maximum number of participants of a booking.
    pub fn max_participants(&self) -> i32 {
        self.0.max_participants.into()
    }

    /// URL of a picture of this `Activity`.
    pub fn image_url(&self) -> Option<String> {
        self.0.image_url.as_ref().map(ToString::to_string)
    }

    /// Indicator whether this `Activity` can be booked.
    pub fn available(&self) -> bool {
        self.0.available
    }

    /// `Location` of this `Activity`.
    pub fn location(&self) -> api::Location {
        #[expect(unsafe_code, reason = "referenced by foreign key")]
        unsafe {
            api::Location::new_unchecked(self.0.location_id)
        }
    }

    /// `DateTime` when this `Activity` was added to the catalog.
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}
