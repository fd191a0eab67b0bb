//! GraphQL API definitions.

pub mod booking;
pub mod catalog;
pub mod location;
mod mutation;
mod query;
pub mod user;

pub use self::{
    booking::{Booking, BookingValue},
    location::Location,
    mutation::Mutation,
    query::Query,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    Mutation,
    juniper::EmptySubscription<crate::Context>,
>;
