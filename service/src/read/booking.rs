//! [`Booking`]-related read definitions.

use common::Date;
use derive_more::{Deref, From, Into};

use crate::domain::catalog;
#[cfg(doc)]
use crate::domain::{booking::Status, Booking};

/// Number of units of an item held by [`Booking`]s over some [`Period`].
///
/// Only [`Booking`]s with a holding [`Status`] are accounted.
#[derive(Clone, Copy, Debug, Default, Deref, Eq, From, Into, PartialEq)]
pub struct Reserved(pub u32);

impl Reserved {
    /// Computes the highest number of units held on any single day of the
    /// `[start, end)` range by the provided [`Hold`]s.
    ///
    /// [`Hold`]s ending on a day free their units on that very day.
    #[must_use]
    pub fn peak(
        start: Date,
        end: Date,
        holds: impl IntoIterator<Item = Hold>,
    ) -> Self {
        let mut changes = holds
            .into_iter()
            .filter(|h| h.units > 0 && h.start < end && h.end > start)
            .flat_map(|h| {
                let units = i64::from(h.units);
                [(h.start.max(start), units), (h.end.min(end), -units)]
            })
            .collect::<Vec<_>>();
        // Releases sort before holds of the same day.
        changes.sort_unstable();

        let (_, peak) = changes.into_iter().fold(
            (0_i64, 0_i64),
            |(held, peak), (_, units)| {
                let held = held + units;
                (held, peak.max(held))
            },
        );
        Self(u32::try_from(peak).unwrap_or(u32::MAX))
    }
}

/// Units of an item held over `[start, end)` by a single [`Booking`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hold {
    /// First held day.
    pub start: Date,

    /// Day the units are freed on.
    pub end: Date,

    /// Number of held units.
    pub units: u32,
}

/// Period of an item to count [`Reserved`] units over.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Period {
    /// Item to count [`Reserved`] units of.
    pub item: catalog::Ref,

    /// First day of this [`Period`].
    pub start: Date,

    /// Day after the last one of this [`Period`].
    pub end: Date,
}

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{Hold, Reserved};

    fn day(d: u8) -> Date {
        Date::from_ymd(2025, 1, d).unwrap()
    }

    fn hold(start: u8, end: u8, units: u32) -> Hold {
        Hold {
            start: day(start),
            end: day(end),
            units,
        }
    }

    #[test]
    fn back_to_back_holds_do_not_stack() {
        let holds = [hold(10, 12, 2), hold(12, 14, 2)];

        assert_eq!(Reserved::peak(day(10), day(14), holds), Reserved(2));
    }

    #[test]
    fn overlapping_holds_stack_on_shared_days() {
        let holds = [hold(10, 13, 2), hold(12, 14, 1), hold(1, 9, 5)];

        assert_eq!(Reserved::peak(day(10), day(14), holds), Reserved(3));
        assert_eq!(Reserved::peak(day(10), day(12), holds), Reserved(2));
        assert_eq!(Reserved::peak(day(13), day(20), holds), Reserved(1));
    }

    #[test]
    fn holds_outside_the_period_are_ignored() {
        let holds = [hold(1, 10, 4), hold(14, 20, 4)];

        assert_eq!(Reserved::peak(day(10), day(14), holds), Reserved(0));
        assert_eq!(Reserved::peak(day(10), day(14), []), Reserved(0));
    }
}
