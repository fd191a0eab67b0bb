//! [`Location`] definitions.

use common::{unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::{Description, ImageUrl, Name};

/// Resort location catalog items are offered at.
#[derive(Clone, Debug)]
pub struct Location {
    /// ID of this [`Location`].
    pub id: Id,

    /// [`Name`] of this [`Location`].
    pub name: Name,

    /// [`Description`] of this [`Location`], if any.
    pub description: Option<Description>,

    /// Street address, if any.
    pub address: Option<String>,

    /// City this [`Location`] is in.
    pub city: String,

    /// Country this [`Location`] is in.
    pub country: String,

    /// Picture of this [`Location`], if any.
    pub image_url: Option<ImageUrl>,

    /// [`DateTime`] when this [`Location`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// ID of a [`Location`].
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

/// [`DateTime`] when a [`Location`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Location, unit::Creation)>;
