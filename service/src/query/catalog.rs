//! [`Query`] collection related to catalog items.

use common::operations::By;

use crate::{
    domain::catalog::{
        self, Accommodation, Activity, Equipment, Pass, SportsSchool,
    },
    read::catalog::{AccommodationFilter, SeasonFilter},
};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`Accommodation`] by its [`catalog::Id`].
pub type AccommodationById =
    DatabaseQuery<By<Option<Accommodation>, catalog::Id>>;

/// Queries available [`Accommodation`]s, cheapest first.
pub type Accommodations =
    DatabaseQuery<By<Vec<Accommodation>, AccommodationFilter>>;

/// Queries an [`Activity`] by its [`catalog::Id`].
pub type ActivityById = DatabaseQuery<By<Option<Activity>, catalog::Id>>;

/// Queries available [`Activity`]s of a season.
pub type Activities = DatabaseQuery<By<Vec<Activity>, SeasonFilter>>;

/// Queries a [`SportsSchool`] by its [`catalog::Id`].
pub type SportsSchoolById =
    DatabaseQuery<By<Option<SportsSchool>, catalog::Id>>;

/// Queries available [`SportsSchool`]s of a season.
pub type SportsSchools = DatabaseQuery<By<Vec<SportsSchool>, SeasonFilter>>;

/// Queries an [`Equipment`] by its [`catalog::Id`].
pub type EquipmentById = DatabaseQuery<By<Option<Equipment>, catalog::Id>>;

/// Queries in-stock [`Equipment`] of a season.
pub type EquipmentList = DatabaseQuery<By<Vec<Equipment>, SeasonFilter>>;

/// Queries a [`Pass`] by its [`catalog::Id`].
pub type PassById = DatabaseQuery<By<Option<Pass>, catalog::Id>>;

/// Queries [`Pass`]es on sale for a season, cheapest first.
pub type Passes = DatabaseQuery<By<Vec<Pass>, SeasonFilter>>;
