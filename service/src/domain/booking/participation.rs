//! [`Participation`] [`Booking`] definition.

use common::{Date, Money};

#[cfg(doc)]
use crate::domain::{catalog::Activity, Booking};
use crate::domain::{catalog, user};

use super::{CreationDateTime, Id, Status};

/// [`Booking`] of an [`Activity`] on a single day.
#[derive(Clone, Debug)]
pub struct Participation {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the user booking.
    pub user_id: user::Id,

    /// ID of the booked [`Activity`].
    pub activity_id: catalog::Id,

    /// Day of the [`Activity`].
    pub booking_date: Date,

    /// Number of participants.
    pub participants: u16,

    /// Total price of this [`Participation`].
    pub total_price: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}
