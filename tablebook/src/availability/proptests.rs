//! Property-based tests for the availability engine.

use super::{AvailabilityEngine, TableBuckets};
use crate::config::RestaurantConfig;
use crate::reservation::{Name, PartySize, Reservation};
use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

fn booking(people: u16, hour: u32) -> Reservation {
    Reservation::new(
        Name::try_from("Ana Lopez").unwrap(),
        NaiveDate::from_ymd_opt(2026, 12, 17).unwrap(),
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        PartySize::try_from(people).unwrap(),
    )
}

fn engine() -> AvailabilityEngine {
    AvailabilityEngine::from_config(&RestaurantConfig::default())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Buckets agree with ceil(people / capacity)
    #[test]
    fn buckets_match_ceiling(tables in 1u16..10, capacity in 1u16..10, people in 1u16..=100) {
        let buckets = TableBuckets::new(tables, capacity);
        let size = PartySize::try_from(people).unwrap();
        let expected = if people <= tables * capacity { people.div_ceil(capacity) } else { 0 };
        prop_assert_eq!(buckets.tables_for(size), expected);
    }

    // Adding a reservation to a slot never frees tables
    #[test]
    fn remaining_is_monotonic(
        sizes in prop::collection::vec(1u16..=16, 0..6),
        extra in 1u16..=16,
        candidate in 1u16..=16,
    ) {
        let engine = engine();
        let mut existing: Vec<_> = sizes.iter().map(|&n| booking(n, 20)).collect();
        let before = engine.remaining_tables(&booking(candidate, 20), &existing);
        existing.push(booking(extra, 20));
        let after = engine.remaining_tables(&booking(candidate, 20), &existing);
        prop_assert!(after < before);
    }

    // Accepted candidates always fit on the tables that are left
    #[test]
    fn accepted_candidates_fit(
        sizes in prop::collection::vec(1u16..=16, 0..4),
        candidate in 1u16..=16,
    ) {
        let engine = engine();
        let existing: Vec<_> = sizes.iter().map(|&n| booking(n, 12)).collect();
        let candidate = booking(candidate, 12);
        let remaining = engine.remaining_tables(&candidate, &existing);
        let verdict = engine.check(&candidate, &existing);
        if verdict.is_available() {
            prop_assert!(remaining > 0);
            prop_assert!(i64::from(candidate.people().value()) <= 4 * remaining);
        }
    }

    // Reservations in another slot never matter
    #[test]
    fn other_slots_irrelevant(sizes in prop::collection::vec(1u16..=16, 0..8), candidate in 1u16..=16) {
        let engine = engine();
        let existing: Vec<_> = sizes.iter().map(|&n| booking(n, 14)).collect();
        let candidate = booking(candidate, 22);
        prop_assert_eq!(engine.check(&candidate, &existing), engine.check(&candidate, &[]));
    }
}
