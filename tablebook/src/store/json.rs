//! File-backed reservation store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::reservation::Reservation;

use super::{document, ReservationStore, StoreConfig};

/// Reservation store kept in a JSON document on disk.
///
/// The document is read in full on every load and rewritten in full on
/// every save. Saves go through a temporary file in the same directory that
/// is renamed over the store, so a crash never leaves a half-written file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens the store described by `config`.
    ///
    /// When the file is missing and `auto_create` is set, an empty document
    /// (`{}`) is written first.
    ///
    /// # Errors
    ///
    /// Returns `StoreNotFound` if the file is missing and auto-creation is
    /// disabled, or an I/O error if the file cannot be created.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let store = Self { path: config.path };

        if !store.path.exists() {
            if !config.auto_create {
                return Err(Error::StoreNotFound { path: store.path });
            }
            if let Some(parent) = store.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            log::debug!("creating empty reservation store at {}", store.path.display());
            store.write(&[])?;
        }

        Ok(store)
    }

    /// Returns the path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[Reservation]) -> Result<()> {
        let bytes = document::encode(records)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

impl ReservationStore for JsonStore {
    fn load(&self) -> Result<Vec<Reservation>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::StoreNotFound {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };
        let records = document::decode(&self.path, &contents)?;
        log::debug!("loaded {} reservation(s) from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&mut self, records: &[Reservation]) -> Result<()> {
        log::debug!("saving {} reservation(s) to {}", records.len(), self.path.display());
        self.write(records)
    }
}
