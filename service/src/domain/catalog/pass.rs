//! [`Pass`] definitions.

use common::Money;

use crate::domain::{
    booking::pricing::{Capacity, Rate, Terms},
    location,
};

use super::{CreationDateTime, Description, Id, ImageUrl, Name, Season};

/// Multi-day activity pass, sold at a flat price.
#[derive(Clone, Debug)]
pub struct Pass {
    /// ID of this [`Pass`].
    pub id: Id,

    /// ID of the [`Location`] this [`Pass`] is valid at.
    ///
    /// [`Location`]: crate::domain::Location
    pub location_id: location::Id,

    /// [`Name`] of this [`Pass`].
    pub name: Name,

    /// [`Description`] of this [`Pass`], if any.
    pub description: Option<Description>,

    /// [`Season`] this [`Pass`] is valid in.
    pub season: Season,

    /// Number of days this [`Pass`] is valid for, starting from its first
    /// day.
    pub duration_days: u16,

    /// Price of this [`Pass`].
    pub price: Money,

    /// Benefits included, in display order.
    pub benefits: Vec<String>,

    /// Picture of this [`Pass`], if any.
    pub image_url: Option<ImageUrl>,

    /// Indicator whether this [`Pass`] is on sale.
    pub available: bool,

    /// [`DateTime`] when this [`Pass`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Pass {
    /// Returns [`Terms`] this [`Pass`] is sold on.
    ///
    /// Any number of [`Pass`]es may be sold, one per purchase.
    #[must_use]
    pub fn terms(&self) -> Terms {
        Terms {
            available: self.available,
            capacity: Capacity::Unbounded,
            rate: Rate::Flat(self.price),
        }
    }
}
