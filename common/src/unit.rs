//! Marker types describing what a [`DateTimeOf`] stands for.
//!
//! [`DateTimeOf`]: crate::DateTimeOf

/// Moment an entity was created at.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Moment something stops being valid at.
#[derive(Clone, Copy, Debug)]
pub struct Expiration;
