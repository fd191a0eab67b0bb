//! [`Pass`]-related definitions.

use common::{DateTime, Money};
use derive_more::From;
use juniper::graphql_object;
use service::domain;

use crate::{api, Context};

/// Multi-day activity pass.
#[derive(Clone, Debug, From)]
pub struct Pass(domain::catalog::Pass);

/// Multi-day activity pass, priced per purchase.
#[graphql_object(name = "ActivityPass", context = Context)]
impl Pass {
    /// Unique identifier of this `ActivityPass`.
    pub fn id(&self) -> api::catalog::Id {
        self.0.id.into()
    }

    /// Name of this `ActivityPass`.
    pub fn name(&self) -> &str {
        self.0.name.as_ref()
    }

    /// Description of this `ActivityPass`.
    pub fn description(&self) -> Option<String> {
        self.0.description.as_ref().map(ToString::to_string)
    }

    /// `Season` this `ActivityPass` is valid in.
    pub fn season(&self) -> api::catalog::Season {
        self.0.season.into()
    }

    /// Number of days this `ActivityPass` is valid for.
    pub fn duration_days(&self) -> i32 {
        self.0.duration_days.into()
    }

    /// Price of a purchase.
    pub fn price(&self) -> Money {
        self.0.price
    }

    /// Benefits this `ActivityPass` gives.
    pub fn benefits(&self) -> Vec<String> {
        self.0.benefits.clone()
    }

    /// URL of a picture of this `ActivityPass`.
    pub fn image_url(&self) -> Option<String> {
        self.0.image_url.as_ref().map(ToString::to_string)
    }

    /// Indicator whether this `ActivityPass` is on sale.
    pub fn available(&self) -> bool {
        self.0.available
    }

    /// `Location` of this `ActivityPass`.
    pub fn location(&self) -> api::Location {
        #[expect(unsafe_code, reason = "referenced by foreign key")]
        unsafe {
            api::Location::new_unchecked(self.0.location_id)
        }
    }

    /// `DateTime` when this `ActivityPass` was added to the catalog.
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}
