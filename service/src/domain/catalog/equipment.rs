//! [`Equipment`] definitions.

use common::Money;

use crate::domain::{
    booking::pricing::{Capacity, Rate, Terms},
    location,
};

use super::{CreationDateTime, Description, Id, ImageUrl, Name, Season};

/// Rentable equipment, priced per unit and day.
///
/// There is no availability flag: [`Equipment`] is available as long as any
/// of its units is in stock.
#[derive(Clone, Debug)]
pub struct Equipment {
    /// ID of this [`Equipment`].
    pub id: Id,

    /// ID of the [`Location`] this [`Equipment`] is rented out at.
    ///
    /// [`Location`]: crate::domain::Location
    pub location_id: location::Id,

    /// [`Name`] of this [`Equipment`].
    pub name: Name,

    /// [`Description`] of this [`Equipment`], if any.
    pub description: Option<Description>,

    /// Category (skis, boards, bikes, ...).
    pub category: String,

    /// [`Season`] this [`Equipment`] is used in.
    pub season: Season,

    /// Size, if the [`Equipment`] comes in sizes.
    pub size: Option<String>,

    /// Price of renting a single unit for a day.
    pub price_per_day: Money,

    /// Number of units owned by the rental.
    pub quantity_available: u16,

    /// Picture of this [`Equipment`], if any.
    pub image_url: Option<ImageUrl>,

    /// [`DateTime`] when this [`Equipment`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Equipment {
    /// Returns [`Terms`] this [`Equipment`] is rented on.
    #[must_use]
    pub fn terms(&self) -> Terms {
        Terms {
            available: self.quantity_available > 0,
            capacity: Capacity::Bounded(self.quantity_available),
            rate: Rate::PerUnitDay(self.price_per_day),
        }
    }
}
