//! [`Stay`] [`Booking`] definition.

use common::{Date, Money};

#[cfg(doc)]
use crate::domain::{catalog::Accommodation, Booking};
use crate::domain::{catalog, user};

use super::{CreationDateTime, Id, Status};

/// [`Booking`] of an [`Accommodation`] for a range of nights.
#[derive(Clone, Debug)]
pub struct Stay {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the user staying.
    pub user_id: user::Id,

    /// ID of the booked [`Accommodation`].
    pub accommodation_id: catalog::Id,

    /// Day of arrival.
    pub check_in_date: Date,

    /// Day of departure, always after the [`Stay::check_in_date`].
    pub check_out_date: Date,

    /// Number of guests.
    pub guests: u16,

    /// Total price of this [`Stay`].
    pub total_price: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Stay {
    /// Checks whether this [`Stay`] occupies any night between the provided
    /// dates, the `check_out` date exclusive.
    #[must_use]
    pub fn overlaps(&self, check_in: Date, check_out: Date) -> bool {
        self.check_in_date < check_out && check_in < self.check_out_date
    }
}

#[cfg(test)]
mod spec {
    use common::{Currency, Date, Money};
    use uuid::Uuid;

    use crate::domain::{
        booking::{CreationDateTime, Id, Status},
        catalog,
    };

    use super::Stay;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn overlaps_on_shared_nights_only() {
        let stay = Stay {
            id: Id::new(),
            user_id: Uuid::nil().into(),
            accommodation_id: catalog::Id::new(),
            check_in_date: date("2025-06-01"),
            check_out_date: date("2025-06-04"),
            guests: 2,
            total_price: Money {
                amount: "300".parse().unwrap(),
                currency: Currency::Usd,
            },
            status: Status::Confirmed,
            created_at: CreationDateTime::now(),
        };

        assert!(stay.overlaps(date("2025-06-03"), date("2025-06-05")));
        assert!(stay.overlaps(date("2025-05-30"), date("2025-06-02")));
        assert!(stay.overlaps(date("2025-06-02"), date("2025-06-03")));
        assert!(stay.overlaps(date("2025-05-01"), date("2025-07-01")));
        assert!(!stay.overlaps(date("2025-06-04"), date("2025-06-06")));
        assert!(!stay.overlaps(date("2025-05-29"), date("2025-06-01")));
    }
}
