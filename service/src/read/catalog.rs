//! Catalog-related read definitions.

use crate::domain::catalog::{accommodation, Season};
#[cfg(doc)]
use crate::domain::catalog::{Accommodation, Item};

/// Filter of [`Item`] lists by [`Season`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeasonFilter {
    /// [`Season`] listed [`Item`]s must be offered in.
    ///
    /// [`None`] lists [`Item`]s of any [`Season`].
    pub season: Option<Season>,
}

/// Filter of [`Accommodation`] lists.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AccommodationFilter {
    /// [`accommodation::Type`] listed [`Accommodation`]s must be of.
    ///
    /// [`None`] lists [`Accommodation`]s of any [`accommodation::Type`].
    pub kind: Option<accommodation::Type>,
}
