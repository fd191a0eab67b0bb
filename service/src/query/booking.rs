//! [`Query`] collection related to [`Booking`]s.

use common::operations::By;

use crate::domain::{user, Booking};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all [`Booking`]s of a user, newest first.
pub type ByUser = DatabaseQuery<By<Vec<Booking>, user::Id>>;
