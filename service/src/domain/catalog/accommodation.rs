//! [`Accommodation`] definitions.

use common::{define_kind, Money};

use crate::domain::{
    booking::pricing::{Capacity, Rate, Terms},
    location,
};

use super::{CreationDateTime, Description, Id, ImageUrl, Name};

/// Place to stay at, booked per night.
#[derive(Clone, Debug)]
pub struct Accommodation {
    /// ID of this [`Accommodation`].
    pub id: Id,

    /// ID of the [`Location`] this [`Accommodation`] belongs to.
    ///
    /// [`Location`]: crate::domain::Location
    pub location_id: location::Id,

    /// [`Name`] of this [`Accommodation`].
    pub name: Name,

    /// [`Description`] of this [`Accommodation`], if any.
    pub description: Option<Description>,

    /// [`Type`] of this [`Accommodation`].
    pub kind: Type,

    /// Maximum number of guests.
    pub capacity: u16,

    /// Price of a single night.
    pub price_per_night: Money,

    /// Amenities offered, in display order.
    pub amenities: Vec<String>,

    /// Picture of this [`Accommodation`], if any.
    pub image_url: Option<ImageUrl>,

    /// Indicator whether this [`Accommodation`] accepts bookings.
    pub available: bool,

    /// [`DateTime`] when this [`Accommodation`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Accommodation {
    /// Returns [`Terms`] this [`Accommodation`] is booked on.
    #[must_use]
    pub fn terms(&self) -> Terms {
        Terms {
            available: self.available,
            capacity: Capacity::Bounded(self.capacity),
            rate: Rate::PerNight(self.price_per_night),
        }
    }
}

define_kind! {
    #[doc = "Type of an [`Accommodation`]."]
    #[case = "snake_case"]
    enum Type {
        #[doc = "Small wooden cabin."]
        Cabin,

        #[doc = "Hotel suite."]
        Suite,

        #[doc = "Mountain chalet."]
        Chalet,

        #[doc = "Private villa."]
        Villa,
    }
}
