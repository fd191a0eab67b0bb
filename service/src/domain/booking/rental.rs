//! [`Rental`] [`Booking`] definition.

use common::{Date, Money};

#[cfg(doc)]
use crate::domain::{catalog::Equipment, Booking};
use crate::domain::{catalog, user};

use super::{CreationDateTime, Id, Status};

/// [`Booking`] of some units of [`Equipment`] for a range of days.
#[derive(Clone, Debug)]
pub struct Rental {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the user renting.
    pub user_id: user::Id,

    /// ID of the rented [`Equipment`].
    pub equipment_id: catalog::Id,

    /// Day of pick-up.
    pub rental_start_date: Date,

    /// Day of return, always after the [`Rental::rental_start_date`].
    pub rental_end_date: Date,

    /// Number of rented units.
    pub quantity: u16,

    /// Total price of this [`Rental`].
    pub total_price: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Rental {
    /// Checks whether this [`Rental`] holds its units on any day between the
    /// provided dates, the `end` date exclusive.
    #[must_use]
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        self.rental_start_date < end && start < self.rental_end_date
    }
}
