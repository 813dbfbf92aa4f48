//! In-memory reservation store.

use crate::error::Result;
use crate::reservation::Reservation;

use super::ReservationStore;

/// Reservation store kept entirely in memory.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tablebook::store::{MemoryStore, ReservationStore};
/// use tablebook::{Name, PartySize, Reservation};
///
/// let mut store = MemoryStore::new();
/// let reservation = Reservation::new(
///     Name::try_from("Ana Lopez").unwrap(),
///     NaiveDate::from_ymd_opt(2026, 12, 17).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
///     PartySize::try_from(2).unwrap(),
/// );
/// store.insert(reservation.clone()).unwrap();
/// assert_eq!(store.list_all().unwrap(), vec![reservation]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Reservation>,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records` as-is.
    #[must_use]
    pub fn with_records(records: Vec<Reservation>) -> Self {
        Self { records, saves: 0 }
    }

    /// Number of times the collection has been saved.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl ReservationStore for MemoryStore {
    fn load(&self) -> Result<Vec<Reservation>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Reservation]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
