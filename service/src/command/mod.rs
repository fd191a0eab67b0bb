//! [`Command`] definition.

pub mod authorize_session;
pub mod create_booking;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    authorize_session::AuthorizeSession, create_booking::CreateBooking,
};
