//! [`SportsSchool`]-related definitions.

use common::{DateTime, Money};
use derive_more::From;
use juniper::graphql_object;
use service::domain;

use crate::{api, Context};

/// Sports school course.
#[derive(Clone, Debug, From)]
pub struct SportsSchool(domain::catalog::SportsSchool);

/// Sports school course, priced per enrollment.
#[graphql_object(context = Context)]
impl SportsSchool {
    /// Unique identifier of this `SportsSchool`.
    pub fn id(&self) -> api::catalog::Id {
        self.0.id.into()
    }

    /// Name of this `SportsSchool`.
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// Description of this `SportsSchool`.
    pub fn description(&self) -> Option<String> {
        self.0.description.as_ref().map(ToString::to_string)
    }

    /// Sport taught by this `SportsSchool`.
    pub fn sport_type(&self) -> &str {
        &self.0.sport_type
    }

    /// `Season` this `SportsSchool` is offered in.
    pub fn season(&self) -> api::catalog::Season {
        self.0.season.into()
    }

    /// Skill level this `SportsSchool` is aimed at.
    pub fn skill_level(&self) -> Option<&str> {
        self.0.skill_level.as_deref()
    }

    /// Duration of the course in days.
    pub fn duration_days(&self) -> i32 {
        self.0.duration_days.into()
    }

    /// Price of an enrollment.
    pub fn price(&self) -> Money {
        self.0.price
    }

    /// Maximum number of students of an enrollment.
    pub fn max_students(&self) -> i32 {
        self.0.max_students.into()
    }

    /// URL of a picture of this `SportsSchool`.
    pub fn image_url(&self) -> Option<String> {
        self.0.image_url.as_ref().map(ToString::to_string)
    }

    /// Indicator whether this `SportsSchool` accepts enrollments.
    pub fn available(&self) -> bool {
        self.0.available
    }

    /// `Location` of this `SportsSchool`.
    pub fn location(&self) -> api::Location {
        #[expect(unsafe_code, reason = "referenced by foreign key")]
        unsafe {
            api::Location::new_unchecked(self.0.location_id)
        }
    }

    /// `DateTime` when this `SportsSchool` was added to the catalog.
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}
