//! [`Purchase`] [`Booking`] definition.

use common::{Date, Money};

#[cfg(doc)]
use crate::domain::{catalog::Pass, Booking};
use crate::domain::{catalog, user};

use super::{CreationDateTime, Id, Status};

/// [`Booking`] of a [`Pass`].
#[derive(Clone, Debug)]
pub struct Purchase {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the user purchasing.
    pub user_id: user::Id,

    /// ID of the purchased [`Pass`].
    pub pass_id: catalog::Id,

    /// Day the [`Pass`] was purchased on.
    pub purchase_date: Date,

    /// First day the [`Pass`] is valid on.
    pub start_date: Date,

    /// Day the [`Pass`] stops being valid on.
    pub end_date: Date,

    /// Price paid.
    pub total_price: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}
