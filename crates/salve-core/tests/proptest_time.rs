// crates/salve-core/tests/proptest_time.rs
// ============================================================================
// Module: Time-Period Property-Based Tests
// Description: Property tests for window disjointness and exhaustiveness.
// Purpose: Detect gaps or overlaps across the full 00:00–23:59 range.
// ============================================================================

//! Property-based tests for time-period classification invariants.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use salve_core::TimePeriod;
use salve_core::classify_time_period;

/// Expected period for a minutes-since-midnight value, stated independently
/// of the classifier's own window constants.
fn expected_period(minutes: u16) -> TimePeriod {
    match minutes {
        300..=719 => TimePeriod::Morning,
        720..=1019 => TimePeriod::Afternoon,
        1020..=1319 => TimePeriod::Evening,
        _ => TimePeriod::General,
    }
}

proptest! {
    #[test]
    fn every_valid_time_classifies_into_exactly_one_period(minutes in 0u16..1440) {
        let time = format!("{:02}:{:02}", minutes / 60, minutes % 60);
        let period = classify_time_period(&time).unwrap();
        prop_assert_eq!(period, expected_period(minutes));
    }

    #[test]
    fn arbitrary_strings_never_panic(raw in "\\PC*") {
        let _ = classify_time_period(&raw);
    }

    #[test]
    fn non_digit_payloads_are_rejected(raw in "[a-zA-Z :._-]{0,8}") {
        prop_assert!(classify_time_period(&raw).is_err());
    }
}

#[test]
fn windows_are_exhaustive_over_the_whole_day() {
    let mut counts = [0u32; 4];
    for minutes in 0u16..1440 {
        let time = format!("{:02}:{:02}", minutes / 60, minutes % 60);
        let index = match classify_time_period(&time).unwrap() {
            TimePeriod::Morning => 0,
            TimePeriod::Afternoon => 1,
            TimePeriod::Evening => 2,
            TimePeriod::General => 3,
        };
        counts[index] += 1;
    }
    assert_eq!(counts[0], 420, "morning spans 05:00-11:59");
    assert_eq!(counts[1], 300, "afternoon spans 12:00-16:59");
    assert_eq!(counts[2], 300, "evening spans 17:00-21:59");
    assert_eq!(counts[3], 420, "general covers the remainder");
}
