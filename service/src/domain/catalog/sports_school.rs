//! [`SportsSchool`] definitions.

use common::Money;

use crate::domain::{
    booking::pricing::{Capacity, Rate, Terms},
    location,
};

use super::{CreationDateTime, Description, Id, ImageUrl, Name, Season};

/// Course of a sports school, paid once per enrollment.
#[derive(Clone, Debug)]
pub struct SportsSchool {
    /// ID of this [`SportsSchool`].
    pub id: Id,

    /// ID of the [`Location`] this [`SportsSchool`] teaches at.
    ///
    /// [`Location`]: crate::domain::Location
    pub location_id: location::Id,

    /// [`Name`] of this [`SportsSchool`].
    pub name: Name,

    /// [`Description`] of this [`SportsSchool`], if any.
    pub description: Option<Description>,

    /// Sport being taught (skiing, snowboarding, surfing, ...).
    pub sport_type: String,

    /// [`Season`] this [`SportsSchool`] runs in.
    pub season: Season,

    /// Skill level the course is aimed at.
    pub skill_level: Option<String>,

    /// Length of the course in days.
    pub duration_days: u16,

    /// Price of an enrollment.
    pub price: Money,

    /// Maximum number of students in a single enrollment.
    pub max_students: u16,

    /// Picture of this [`SportsSchool`], if any.
    pub image_url: Option<ImageUrl>,

    /// Indicator whether this [`SportsSchool`] accepts enrollments.
    pub available: bool,

    /// [`DateTime`] when this [`SportsSchool`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl SportsSchool {
    /// Returns [`Terms`] this [`SportsSchool`] is enrolled on.
    #[must_use]
    pub fn terms(&self) -> Terms {
        Terms {
            available: self.available,
            capacity: Capacity::Bounded(self.max_students),
            rate: Rate::Flat(self.price),
        }
    }
}
