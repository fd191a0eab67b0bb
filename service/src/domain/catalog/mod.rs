//! Catalog of bookable [`Item`]s.

pub mod accommodation;
pub mod activity;
pub mod equipment;
pub mod pass;
pub mod sports_school;

use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{booking::pricing, location};

pub use self::{
    accommodation::Accommodation, activity::Activity, equipment::Equipment,
    pass::Pass, sports_school::SportsSchool,
};

/// Bookable item of the resort catalog.
#[derive(Clone, Debug, From)]
pub enum Item {
    #[doc(hidden)]
    Accommodation(Accommodation),
    #[doc(hidden)]
    Activity(Activity),
    #[doc(hidden)]
    SportsSchool(SportsSchool),
    #[doc(hidden)]
    Equipment(Equipment),
    #[doc(hidden)]
    Pass(Pass),
}

impl Item {
    /// Returns ID of this [`Item`].
    #[must_use]
    pub fn id(&self) -> Id {
        match self {
            Self::Accommodation(i) => i.id,
            Self::Activity(i) => i.id,
            Self::SportsSchool(i) => i.id,
            Self::Equipment(i) => i.id,
            Self::Pass(i) => i.id,
        }
    }

    /// Returns [`Kind`] of this [`Item`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Accommodation(_) => Kind::Accommodation,
            Self::Activity(_) => Kind::Activity,
            Self::SportsSchool(_) => Kind::SportsSchool,
            Self::Equipment(_) => Kind::Equipment,
            Self::Pass(_) => Kind::Pass,
        }
    }

    /// Returns [`Ref`] addressing this [`Item`].
    #[must_use]
    pub fn to_ref(&self) -> Ref {
        Ref {
            kind: self.kind(),
            id: self.id(),
        }
    }

    /// Returns [`Name`] of this [`Item`].
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            Self::Accommodation(i) => &i.name,
            Self::Activity(i) => &i.name,
            Self::SportsSchool(i) => &i.name,
            Self::Equipment(i) => &i.name,
            Self::Pass(i) => &i.name,
        }
    }

    /// Returns ID of the [`Location`] this [`Item`] is offered at.
    ///
    /// [`Location`]: crate::domain::Location
    #[must_use]
    pub fn location_id(&self) -> location::Id {
        match self {
            Self::Accommodation(i) => i.location_id,
            Self::Activity(i) => i.location_id,
            Self::SportsSchool(i) => i.location_id,
            Self::Equipment(i) => i.location_id,
            Self::Pass(i) => i.location_id,
        }
    }

    /// Returns [`pricing::Terms`] this [`Item`] is booked on.
    #[must_use]
    pub fn terms(&self) -> pricing::Terms {
        match self {
            Self::Accommodation(i) => i.terms(),
            Self::Activity(i) => i.terms(),
            Self::SportsSchool(i) => i.terms(),
            Self::Equipment(i) => i.terms(),
            Self::Pass(i) => i.terms(),
        }
    }

    /// Returns the number of units of this [`Item`] that bookings overlapping
    /// in time compete for.
    ///
    /// [`None`] if overlapping bookings don't affect each other.
    #[must_use]
    pub fn stock(&self) -> Option<u16> {
        match self {
            Self::Accommodation(_) => Some(1),
            Self::Equipment(i) => Some(i.quantity_available),
            Self::Activity(_) | Self::SportsSchool(_) | Self::Pass(_) => None,
        }
    }

    /// Returns the number of [`Item::stock()`] units a booking of the
    /// provided party size holds.
    #[must_use]
    pub fn held_units(&self, party_size: u16) -> u16 {
        match self {
            Self::Equipment(_) => party_size,
            Self::Accommodation(_)
            | Self::Activity(_)
            | Self::SportsSchool(_)
            | Self::Pass(_) => 1,
        }
    }
}

/// ID of an [`Item`].
///
/// Unique only within a single [`Kind`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Reference to an [`Item`] of a known [`Kind`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{kind}(id: {id})")]
pub struct Ref {
    /// [`Kind`] of the referenced [`Item`].
    pub kind: Kind,

    /// ID of the referenced [`Item`].
    pub id: Id,
}

define_kind! {
    #[doc = "Kind of an [`Item`]."]
    #[case = "snake_case"]
    enum Kind {
        #[doc = "[`Accommodation`] to stay at."]
        Accommodation,

        #[doc = "Guided [`Activity`]."]
        Activity,

        #[doc = "[`SportsSchool`] course."]
        SportsSchool,

        #[doc = "Rentable [`Equipment`]."]
        Equipment,

        #[doc = "Multi-day activity [`Pass`]."]
        Pass,
    }
}

define_kind! {
    #[doc = "Season an [`Item`] is offered in."]
    #[case = "snake_case"]
    enum Season {
        #[doc = "Winter season."]
        Winter,

        #[doc = "Summer season."]
        Summer,

        #[doc = "Offered all year round."]
        All,
    }
}

impl Season {
    /// Checks whether an [`Item`] of this [`Season`] is offered in the
    /// `requested` one.
    #[must_use]
    pub fn matches(self, requested: Self) -> bool {
        self == Self::All || requested == Self::All || self == requested
    }
}

/// Name of an [`Item`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 256
    }
}

impl std::str::FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Free-form description of an [`Item`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Description(String);

/// URL of an [`Item`] picture.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct ImageUrl(String);

/// [`DateTime`] when an [`Item`] was added to the catalog.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Item, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Name, Season};

    #[test]
    fn season_matches_itself_and_all() {
        assert!(Season::Winter.matches(Season::Winter));
        assert!(!Season::Winter.matches(Season::Summer));
        assert!(Season::All.matches(Season::Summer));
        assert!(Season::All.matches(Season::Winter));
        assert!(Season::Summer.matches(Season::All));
    }

    #[test]
    fn season_is_stored_lowercase() {
        assert_eq!(Season::Winter.to_string(), "winter");
        assert_eq!("all".parse::<Season>().unwrap(), Season::All);
        assert!("Spring".parse::<Season>().is_err());
    }

    #[test]
    fn name_is_trimmed_and_non_empty() {
        assert!(Name::new("Alpine Chalet").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" Alpine Chalet").is_none());
        assert!(Name::new("a".repeat(257)).is_none());
    }
}
