//! Common test utilities for integration tests.
//!
//! This module provides fixtures for building reservations, a scripted
//! prompter and temporary store files for testing the tablebook library.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tablebook::{
    Error, Field, FixedClock, JsonStore, Name, PartySize, Prompter, Reservation, Result,
    StoreConfig, ValidationError,
};
use tempfile::TempDir;

/// The instant all integration tests treat as "now": 2026-10-19 13:00.
#[allow(dead_code)]
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(13, 0, 0)
        .unwrap()
}

/// A clock frozen at [`now`].
#[allow(dead_code)]
pub fn clock() -> FixedClock {
    FixedClock::new(now())
}

/// Builds a reservation from store-format date and time strings.
#[allow(dead_code)]
pub fn booking(name: &str, date: &str, time: &str, people: u16) -> Reservation {
    Reservation::new(
        Name::try_from(name).unwrap(),
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        PartySize::try_from(people).unwrap(),
    )
}

/// A JSON store in a fresh temporary directory.
///
/// The directory lives as long as the returned `TempDir`.
#[allow(dead_code)]
pub fn temp_store() -> (TempDir, PathBuf, JsonStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reservation_database.json");
    let store = JsonStore::open(StoreConfig::new(&path)).unwrap();
    (dir, path, store)
}

/// Prompter answering from a fixed script.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every message passed to `notify`, in order.
    pub notes: Vec<String>,
    /// Every rejected value, in order.
    pub rejected: Vec<ValidationError>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, field: Field, _message: &str) -> Result<String> {
        self.answers.pop_front().ok_or(Error::InputClosed { field })
    }

    fn reject(&mut self, _field: Field, error: ValidationError) -> Result<()> {
        self.rejected.push(error);
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notes.push(message.to_string());
    }
}
