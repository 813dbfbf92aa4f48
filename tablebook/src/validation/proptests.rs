//! Property-based tests for field validation.

use super::{Field, FixedClock, ValidationError, Validator};
use crate::config::RestaurantConfig;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn validator() -> Validator<FixedClock> {
    let now = today().and_hms_opt(13, 0, 0).unwrap();
    Validator::with_clock(&RestaurantConfig::default(), FixedClock::new(now))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Any two words of 1-20 letters are accepted
    #[test]
    fn two_words_accepted(first in "[a-zA-ZñáéíóúÑÁÉÍÓÚ]{1,20}", last in "[a-zA-ZñáéíóúÑÁÉÍÓÚ]{1,20}") {
        let name = validator().validate_name(&format!("{} {}", first, last));
        prop_assert!(name.is_ok());
    }

    // A word longer than 20 letters is rejected
    #[test]
    fn long_word_rejected(first in "[a-z]{21,30}", last in "[a-z]{1,20}") {
        let forward = format!("{} {}", first, last);
        let reversed = format!("{} {}", last, first);
        prop_assert!(validator().validate_name(&forward).is_err());
        prop_assert!(validator().validate_name(&reversed).is_err());
    }

    // Digits anywhere make a name invalid
    #[test]
    fn digits_rejected(first in "[a-z]{0,5}[0-9][a-z]{0,5}", last in "[a-z]{1,20}") {
        let full = format!("{} {}", first, last);
        prop_assert!(validator().validate_name(&full).is_err());
    }

    // One or three words are rejected
    #[test]
    fn wrong_word_count_rejected(words in prop::collection::vec("[a-z]{1,10}", 1..6)) {
        prop_assume!(words.len() != 2);
        prop_assert!(validator().validate_name(&words.join(" ")).is_err());
    }

    // Dates on or after today are accepted, earlier dates are past
    #[test]
    fn date_relative_to_today(offset in -2000i64..2000) {
        let date = today() + Duration::days(offset);
        let raw = date.format("%d-%m-%Y").to_string();
        let result = validator().validate_date(&raw);
        if offset < 0 {
            prop_assert_eq!(result, Err(ValidationError::PastDate { date }));
        } else {
            prop_assert_eq!(result, Ok(date));
        }
    }

    // Unpadded day and month are accepted too
    #[test]
    fn date_unpadded(offset in 0i64..2000) {
        let date = today() + Duration::days(offset);
        let raw = date.format("%-d-%-m-%Y").to_string();
        prop_assert_eq!(validator().validate_date(&raw), Ok(date));
    }

    // Party sizes are exactly 1..=16
    #[test]
    fn people_range(n in 0u32..100) {
        let result = validator().validate_people(&n.to_string());
        if (1..=16).contains(&n) {
            prop_assert_eq!(u32::from(result.unwrap().value()), n);
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.field(), Field::People);
        }
    }

    // Only exact slot strings are times
    #[test]
    fn non_slot_times_rejected(hour in 0u32..24, minute in 0u32..60) {
        let raw = format!("{hour:02}:{minute:02}");
        let future = today() + Duration::days(30);
        let result = validator().validate_time(future, &raw);
        let is_slot = minute == 0 && [12, 14, 20, 22].contains(&hour);
        prop_assert_eq!(result.is_ok(), is_slot);
    }
}
