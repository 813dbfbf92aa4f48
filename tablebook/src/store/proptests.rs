//! Property-based tests for the reservation store.

use super::{document, MemoryStore, ReservationStore};
use crate::reservation::{Name, PartySize, Reservation};
use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

fn reservations_strategy() -> impl Strategy<Value = Vec<Reservation>> {
    prop::collection::vec(
        (
            0i64..30,
            prop::sample::select(vec![12u32, 14, 20, 22]),
            1u16..=16,
        ),
        0..20,
    )
    .prop_map(|slots| {
        let base = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        slots
            .into_iter()
            .enumerate()
            .map(|(i, (offset, hour, people))| {
                Reservation::new(
                    Name::try_from(format!("Guest {}", letters(i))).unwrap(),
                    base + Duration::days(offset),
                    NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
                    PartySize::try_from(people).unwrap(),
                )
            })
            .collect()
    })
}

// Names may only contain letters, so indices are spelled with them.
fn letters(mut i: usize) -> String {
    let mut out = String::new();
    loop {
        out.push(char::from(b'a' + u8::try_from(i % 26).unwrap()));
        i /= 26;
        if i == 0 {
            return out;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Inserted records come back sorted by date and time
    #[test]
    fn insert_keeps_chronological_order(records in reservations_strategy()) {
        let mut store = MemoryStore::new();
        for record in records.clone() {
            store.insert(record).unwrap();
        }
        let stored = store.list_all().unwrap();
        prop_assert_eq!(stored.len(), records.len());
        for pair in stored.windows(2) {
            prop_assert!(pair[0].slot_key() <= pair[1].slot_key());
        }
    }

    // Encoded documents use keys "1".."n" with no gaps
    #[test]
    fn encoded_keys_are_dense(records in reservations_strategy()) {
        let bytes = document::encode(&records).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let object = value.as_object().unwrap();
        prop_assert_eq!(object.len(), records.len());
        for n in 1..=records.len() {
            prop_assert!(object.contains_key(&n.to_string()));
        }
    }

    // Removing an absent name leaves the store untouched
    #[test]
    fn remove_absent_is_noop(records in reservations_strategy()) {
        let mut store = MemoryStore::new();
        for record in records {
            store.insert(record).unwrap();
        }
        let before = store.list_all().unwrap();
        let saves = store.saves();
        let missing = Name::try_from("Nobody Here").unwrap();
        prop_assert!(store.remove(&missing).is_err());
        prop_assert_eq!(store.list_all().unwrap(), before);
        prop_assert_eq!(store.saves(), saves);
    }
}
