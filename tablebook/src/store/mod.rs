//! Reservation store.
//!
//! The store is the only place reservations live between runs. It keeps
//! them sorted by `(date, time)` and, on disk, keyed by a dense 1-based
//! index that is rewritten after every change.
//!
//! Access goes through the [`ReservationStore`] trait, which has explicit
//! load and save boundaries and no caching in between. [`JsonStore`] is the
//! file-backed implementation; [`MemoryStore`] keeps everything in memory.
//!
//! There is no locking: two processes changing the same file at once can
//! lose one of the changes.
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::store::{JsonStore, ReservationStore, StoreConfig};
//!
//! let store = JsonStore::open(StoreConfig::new("reservation_database.json")).unwrap();
//! for reservation in store.list_all().unwrap() {
//!     println!("{reservation}");
//! }
//! ```

mod config;
pub mod document;
mod json;
mod memory;

#[cfg(test)]
mod proptests;

pub use config::{default_data_dir, StoreConfig};
pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::error::{Error, Result};
use crate::reservation::{Name, Reservation};

/// Repository of accepted reservations.
///
/// Implementors provide `load` and `save`; the query and mutation methods
/// are built on top of them. Every mutation loads the current collection,
/// changes it, re-sorts it and saves it whole.
pub trait ReservationStore {
    /// Reads the whole collection in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Vec<Reservation>>;

    /// Replaces the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, records: &[Reservation]) -> Result<()>;

    /// Returns all reservations in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_all(&self) -> Result<Vec<Reservation>> {
        self.load()
    }

    /// Looks a reservation up by holder name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no reservation has this name.
    fn find_by_name(&self, name: &Name) -> Result<Reservation> {
        self.load()?
            .into_iter()
            .find(|reservation| reservation.name() == name)
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns `true` if a reservation with this name exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn contains(&self, name: &Name) -> Result<bool> {
        Ok(self.load()?.iter().any(|reservation| reservation.name() == name))
    }

    /// Adds a reservation and returns the updated collection.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is already booked, or an error
    /// if the store cannot be read or written.
    fn insert(&mut self, reservation: Reservation) -> Result<Vec<Reservation>> {
        let mut records = self.load()?;
        if records.iter().any(|r| r.name() == reservation.name()) {
            return Err(Error::DuplicateName {
                name: reservation.name().to_string(),
            });
        }
        log::debug!("inserting reservation for {}", reservation.name());
        records.push(reservation);
        arrange(&mut records);
        self.save(&records)?;
        Ok(records)
    }

    /// Removes the reservation for `name` and returns the updated collection.
    ///
    /// Nothing is written when the name is absent.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no reservation has this name, or an error if
    /// the store cannot be read or written.
    fn remove(&mut self, name: &Name) -> Result<Vec<Reservation>> {
        let records = self.load()?;
        let before = records.len();
        let mut remaining: Vec<_> = records.into_iter().filter(|r| r.name() != name).collect();
        if remaining.len() == before {
            return Err(Error::NotFound {
                name: name.to_string(),
            });
        }
        log::debug!("removing reservation for {name}");
        arrange(&mut remaining);
        self.save(&remaining)?;
        Ok(remaining)
    }
}

/// Sorts records chronologically by `(date, time)`.
///
/// The sort is stable, so reservations for the same slot keep their
/// relative order.
pub fn arrange(records: &mut [Reservation]) {
    records.sort_by_key(Reservation::slot_key);
}
