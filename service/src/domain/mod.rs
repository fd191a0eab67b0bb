//! Domain definitions.

pub mod booking;
pub mod catalog;
pub mod location;
pub mod user;

pub use self::{booking::Booking, location::Location};
