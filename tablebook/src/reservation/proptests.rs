//! Property-based tests for `Name`, `PartySize` and `Reservation`.

use super::{Name, PartySize, Reservation};
use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZñáéíóúÑÁÉÍÓÚ]{1,20}"
}

fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (
        word_strategy(),
        word_strategy(),
        0i64..3650,
        prop::sample::select(vec![12u32, 14, 20, 22]),
        1u16..=16,
    )
        .prop_map(|(first, last, offset, hour, people)| {
            let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
            Reservation::new(
                Name::try_from(format!("{first} {last}")).unwrap(),
                base + Duration::days(offset),
                NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
                PartySize::try_from(people).unwrap(),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Title-casing is idempotent
    #[test]
    fn name_normalization_idempotent(first in word_strategy(), last in word_strategy()) {
        let name = Name::try_from(format!("{first} {last}")).unwrap();
        let again = Name::try_from(name.as_str()).unwrap();
        prop_assert_eq!(name, again);
    }

    // Every word starts upper-case and continues lower-case
    #[test]
    fn name_words_title_cased(first in word_strategy(), last in word_strategy()) {
        let name = Name::try_from(format!("{first} {last}")).unwrap();
        for word in name.as_str().split(' ') {
            let mut chars = word.chars();
            let head = chars.next().unwrap();
            prop_assert!(!head.is_lowercase());
            prop_assert!(chars.all(|c| !c.is_uppercase()));
        }
    }

    // Store records parse back into the same reservation
    #[test]
    fn reservation_record_roundtrip(reservation in reservation_strategy()) {
        let json = serde_json::to_string(&reservation).unwrap();
        let parsed: Reservation = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, reservation);
    }

    // The summary always names the holder and the party size
    #[test]
    fn summary_mentions_holder(reservation in reservation_strategy()) {
        let summary = reservation.summary();
        prop_assert!(summary.contains(reservation.name().as_str()));
        let expected = format!("Reservation for {} people", reservation.people());
        prop_assert!(summary.starts_with(&expected));
    }
}
