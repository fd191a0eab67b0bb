//! [`Enrollment`] [`Booking`] definition.

use common::{Date, Money};

#[cfg(doc)]
use crate::domain::{catalog::SportsSchool, Booking};
use crate::domain::{catalog, user};

use super::{CreationDateTime, Id, Status};

/// [`Booking`] of a [`SportsSchool`] course.
#[derive(Clone, Debug)]
pub struct Enrollment {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the user enrolling.
    pub user_id: user::Id,

    /// ID of the [`SportsSchool`] enrolled in.
    pub sports_school_id: catalog::Id,

    /// First day of the course.
    pub start_date: Date,

    /// Number of students.
    pub students: u16,

    /// Total price of this [`Enrollment`].
    pub total_price: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}
