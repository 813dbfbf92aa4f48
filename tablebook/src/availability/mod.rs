//! Table availability engine.
//!
//! Reservations occupy whole tables: a party takes as many tables as its
//! size bucket says, and a slot is full once its tables are used up.

pub mod buckets;
pub mod engine;

#[cfg(test)]
mod proptests;

pub use buckets::{TableBucket, TableBuckets};
pub use engine::{Availability, AvailabilityEngine, UnavailableReason};
