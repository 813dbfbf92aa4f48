//! Confirmation documents for accepted reservations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::reservation::Reservation;

/// Title of every confirmation document.
pub const CONFIRMATION_TITLE: &str = "Reservation confirmed!";

/// Produces a confirmation for a reservation that has just been stored.
pub trait ConfirmationRenderer {
    /// Renders the confirmation for `reservation`.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation cannot be written.
    fn render(&mut self, reservation: &Reservation) -> Result<()>;
}

/// Writes a plain-text confirmation document to a file.
///
/// The document is the title, an underline, a blank line and the
/// reservation summary.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tablebook::workflow::{ConfirmationRenderer, TextConfirmation};
/// use tablebook::{Name, PartySize, Reservation};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("reservation.txt");
/// let reservation = Reservation::new(
///     Name::try_from("Ana Lopez").unwrap(),
///     NaiveDate::from_ymd_opt(2026, 12, 17).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
///     PartySize::try_from(2).unwrap(),
/// );
///
/// TextConfirmation::new(&path).render(&reservation).unwrap();
/// assert!(std::fs::read_to_string(&path).unwrap().starts_with("Reservation confirmed!"));
/// ```
#[derive(Debug, Clone)]
pub struct TextConfirmation {
    path: PathBuf,
}

impl TextConfirmation {
    /// Creates a renderer writing to `path`.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the document text for `reservation`.
    #[must_use]
    pub fn document(reservation: &Reservation) -> String {
        format!(
            "{CONFIRMATION_TITLE}\n{}\n\n{}\n",
            "=".repeat(CONFIRMATION_TITLE.len()),
            reservation.summary()
        )
    }
}

impl ConfirmationRenderer for TextConfirmation {
    fn render(&mut self, reservation: &Reservation) -> Result<()> {
        log::debug!("writing confirmation to {}", self.path.display());
        fs::write(&self.path, Self::document(reservation))?;
        Ok(())
    }
}
