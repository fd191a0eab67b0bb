//! Catalog item definitions.

mod accommodation;
mod activity;
mod equipment;
mod pass;
mod sports_school;

use derive_more::{Display, From, Into};
use juniper::{GraphQLEnum, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::define_error;

pub use self::{
    accommodation::{Accommodation, Type as AccommodationType},
    activity::Activity,
    equipment::Equipment,
    pass::Pass,
    sports_school::SportsSchool,
};

/// Unique identifier of a catalog item.
///
/// Unique only among the items of the same kind.
#[derive(Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::catalog::Id)]
#[into(domain::catalog::Id)]
#[graphql(name = "CatalogItemId", transparent)]
pub struct Id(Uuid);

/// Season a catalog item is offered in.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum Season {
    /// Winter season.
    Winter,

    /// Summer season.
    Summer,

    /// Offered all year round.
    All,
}

impl From<domain::catalog::Season> for Season {
    fn from(season: domain::catalog::Season) -> Self {
        use domain::catalog::Season as S;
        match season {
            S::Winter => Self::Winter,
            S::Summer => Self::Summer,
            S::All => Self::All,
        }
    }
}

impl From<Season> for domain::catalog::Season {
    fn from(season: Season) -> Self {
        match season {
            Season::Winter => Self::Winter,
            Season::Summer => Self::Summer,
            Season::All => Self::All,
        }
    }
}

define_error! {
    enum ItemError {
        #[code = "ITEM_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "Requested item does not exist"]
        NotExists,
    }
}
