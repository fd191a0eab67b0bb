//! [`Equipment`]-related definitions.

use common::{DateTime, Money};
use derive_more::From;
use juniper::graphql_object;
use service::domain;

use crate::{api, Context};

/// Rentable equipment.
#[derive(Clone, Debug, From)]
pub struct Equipment(domain::catalog::Equipment);

/// Rentable equipment, priced per unit and day.
#[graphql_object(context = Context)]
impl Equipment {
    /// Unique identifier of this `Equipment`.
    pub fn id(&self) -> api::catalog::Id {
        self.0.id.into()
    }

    /// Name of this `Equipment`.
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// Description of this `Equipment`.
    pub fn description(&self) -> Option<String> {
        self.0.description.as_ref().map(ToString::to_string)
    }

    /// Category of this `Equipment`.
    pub fn category(&self) -> &str {
        &self.0.category
    }

    /// `Season` this `Equipment` is rented in.
    pub fn season(&self) -> api::catalog::Season {
        self.0.season.into()
    }

    /// Size of this `Equipment`.
    pub fn size(&self) -> Option<&str> {
        self.0.size.as_deref()
    }

    /// Price of renting a single unit for a day.
    pub fn price_per_day(&self) -> Money {
        self.0.price_per_day
    }

    /// Number of units in stock.
    pub fn quantity_available(&self) -> i32 {
        self.0.quantity_available.into()
    }

    /// URL of a picture of this `Equipment`.
    pub fn image_url(&self) -> Option<String> {
        self.0.image_url.as_ref().map(ToString::to_string)
    }

    /// `Location` this `Equipment` is rented at.
    pub fn location(&self) -> api::Location {
        #[expect(unsafe_code, reason = "referenced by foreign key")]
        unsafe {
            api::Location::new_unchecked(self.0.location_id)
        }
    }

    /// `DateTime` when this `Equipment` was added to the catalog.
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}
