//! On-disk document format.
//!
//! A store file is one JSON object whose keys are the decimal indices
//! `"1"`, `"2"`, ... in order, each mapping to a reservation record.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reservation::Reservation;

/// Serializes records under dense keys `"1".."n"` in slice order.
struct Keyed<'a>(&'a [Reservation]);

impl Serialize for Keyed<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, reservation) in self.0.iter().enumerate() {
            map.serialize_entry(&(index + 1).to_string(), reservation)?;
        }
        map.end()
    }
}

/// Records read back by index; a repeated key is an error instead of
/// silently replacing the earlier record.
struct Indexed(BTreeMap<u64, Reservation>);

impl<'de> Deserialize<'de> for Indexed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IndexedVisitor;

        impl<'de> Visitor<'de> for IndexedVisitor {
            type Value = Indexed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of indexed reservation records")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Indexed, A::Error> {
                let mut records = BTreeMap::new();
                while let Some((index, reservation)) = access.next_entry::<u64, Reservation>()? {
                    if records.insert(index, reservation).is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "key '{index}' appears twice"
                        )));
                    }
                }
                Ok(Indexed(records))
            }
        }

        deserializer.deserialize_map(IndexedVisitor)
    }
}

/// Renders records as a store document, pretty-printed with 4-space indents.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(records: &[Reservation]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Keyed(records).serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Parses a store document, returning the records in key order.
///
/// Keys are read as integers, so `"10"` sorts after `"9"`. Gaps in the key
/// sequence are tolerated and logged; they disappear on the next write.
///
/// # Errors
///
/// Returns `StoreCorrupt` if the document is not an object of indexed
/// reservation records, repeats a key, or holds two reservations under the
/// same name.
pub fn decode(path: &Path, contents: &str) -> Result<Vec<Reservation>> {
    let corrupt = |details: String| Error::StoreCorrupt {
        path: path.to_path_buf(),
        details,
    };
    let Indexed(keyed) = serde_json::from_str(contents).map_err(|e| corrupt(e.to_string()))?;

    let mut names = HashSet::new();
    if let Some(repeated) = keyed.values().find(|r| !names.insert(r.name())) {
        return Err(corrupt(format!(
            "more than one reservation for {}",
            repeated.name()
        )));
    }

    let dense = keyed.keys().copied().eq(1..=keyed.len() as u64);
    if !dense {
        log::warn!(
            "store {} has non-sequential keys; they will be renumbered on the next change",
            path.display()
        );
    }

    Ok(keyed.into_values().collect())
}
