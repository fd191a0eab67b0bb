//! [`Accommodation`]-related definitions.

use common::{DateTime, Money};
use derive_more::From;
use juniper::{graphql_object, GraphQLEnum};
use service::domain;

use crate::{api, Context};

/// Accommodation to stay at.
#[derive(Clone, Debug, From)]
pub struct Accommodation(domain::catalog::Accommodation);

/// Accommodation to stay at, priced per night.
#[graphql_object(context = Context)]
impl Accommodation {
    /// Unique identifier of this `Accommodation`.
    pub fn id(&self) -> api::catalog::Id {
        self.0.id.into()
    }

    /// Name of this `Accommodation`.
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// Description of this `Accommodation`.
    pub fn description(&self) -> Option<String> {
        self.0.description.as_ref().map(ToString::to_string)
    }

    /// Type of this `Accommodation`.
    #[graphql(name = "type")]
    pub fn kind(&self) -> Type {
        self.0.kind.into()
    }

    /// Maximum number of guests.
    pub fn capacity(&self) -> i32 {
        self.0.capacity.into()
    }

    /// Price of a single night.
    pub fn price_per_night(&self) -> Money {
        self.0.price_per_night
    }

    /// Amenities this `Accommodation` offers.
    pub fn amenities(&self) -> Vec<String> {
        self.0.amenities.clone()
    }

    /// URL of a picture of this `Accommodation`.
    pub fn image_url(&self) -> Option<String> {
        self.0.image_url.as_ref().map(ToString::to_string)
    }

    /// Indicator whether this `Accommodation` can be booked.
    pub fn available(&self) -> bool {
        self.0.available
    }

    /// `Location` of this `Accommodation`.
    pub fn location(&self) -> api::Location {
        #[expect(unsafe_code, reason = "referenced by foreign key")]
        unsafe {
            api::Location::new_unchecked(self.0.location_id)
        }
    }

    /// `DateTime` when this `Accommodation` was added to the catalog.
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Type of an `Accommodation`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "AccommodationType")]
pub enum Type {
    /// A cabin.
    Cabin,

    /// A hotel suite.
    Suite,

    /// A chalet.
    Chalet,

    /// A villa.
    Villa,
}

impl From<domain::catalog::accommodation::Type> for Type {
    fn from(kind: domain::catalog::accommodation::Type) -> Self {
        use domain::catalog::accommodation::Type as T;
        match kind {
            T::Cabin => Self::Cabin,
            T::Suite => Self::Suite,
            T::Chalet => Self::Chalet,
            T::Villa => Self::Villa,
        }
    }
}

impl From<Type> for domain::catalog::accommodation::Type {
    fn from(kind: Type) -> Self {
        match kind {
            Type::Cabin => Self::Cabin,
            Type::Suite => Self::Suite,
            Type::Chalet => Self::Chalet,
            Type::Villa => Self::Villa,
        }
    }
}
