//! [`Activity`] definitions.

use common::Money;
use rust_decimal::Decimal;

use crate::domain::{
    booking::pricing::{Capacity, Rate, Terms},
    location,
};

use super::{CreationDateTime, Description, Id, ImageUrl, Name, Season};

/// Guided activity taking place on a single day, paid once per booking.
#[derive(Clone, Debug)]
pub struct Activity {
    /// ID of this [`Activity`].
    pub id: Id,

    /// ID of the [`Location`] this [`Activity`] starts at.
    ///
    /// [`Location`]: crate::domain::Location
    pub location_id: location::Id,

    /// [`Name`] of this [`Activity`].
    pub name: Name,

    /// [`Description`] of this [`Activity`], if any.
    pub description: Option<Description>,

    /// [`Season`] this [`Activity`] is offered in.
    pub season: Season,

    /// Difficulty level, as displayed to users.
    pub difficulty_level: Option<String>,

    /// Duration of this [`Activity`] in hours.
    pub duration_hours: Option<Decimal>,

    /// Price of a booking.
    pub price: Money,

    /// Maximum number of participants in a single booking.
    pub max_participants: u16,

    /// Picture of this [`Activity`], if any.
    pub image_url: Option<ImageUrl>,

    /// Indicator whether this [`Activity`] accepts bookings.
    pub available: bool,

    /// [`DateTime`] when this [`Activity`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Activity {
    /// Returns [`Terms`] this [`Activity`] is booked on.
    #[must_use]
    pub fn terms(&self) -> Terms {
        Terms {
            available: self.available,
            capacity: Capacity::Bounded(self.max_participants),
            rate: Rate::Flat(self.price),
        }
    }
}
