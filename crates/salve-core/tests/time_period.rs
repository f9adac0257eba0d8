// crates/salve-core/tests/time_period.rs
// ============================================================================
// Module: Time-Period Classification Tests
// Description: Validate window boundaries and strict time-string parsing.
// Purpose: Ensure malformed input is rejected and boundaries are inclusive.
// Dependencies: salve-core
// ============================================================================

//! Boundary and rejection tests for the time-period classifier.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use salve_core::GreetingError;
use salve_core::TimePeriod;
use salve_core::classify_time_period;

#[test]
fn window_boundaries_are_inclusive() {
    let cases = [
        ("04:59", TimePeriod::General),
        ("05:00", TimePeriod::Morning),
        ("11:59", TimePeriod::Morning),
        ("12:00", TimePeriod::Afternoon),
        ("16:59", TimePeriod::Afternoon),
        ("17:00", TimePeriod::Evening),
        ("21:59", TimePeriod::Evening),
        ("22:00", TimePeriod::General),
    ];
    for (time, expected) in cases {
        assert_eq!(classify_time_period(time).unwrap(), expected, "time: {time}");
    }
}

#[test]
fn interior_times_classify_into_their_window() {
    assert_eq!(classify_time_period("08:30").unwrap(), TimePeriod::Morning);
    assert_eq!(classify_time_period("14:05").unwrap(), TimePeriod::Afternoon);
    assert_eq!(classify_time_period("18:36").unwrap(), TimePeriod::Evening);
    assert_eq!(classify_time_period("02:15").unwrap(), TimePeriod::General);
    assert_eq!(classify_time_period("23:01").unwrap(), TimePeriod::General);
}

#[test]
fn malformed_values_are_rejected_not_mapped_to_general() {
    let rejected = [
        "24:00", "25:10", "12:60", "1:1", "0199:01", "12-30", "ab:cd", "12:3",
        "1230", "12:300", " 12:30", "12:30 ", "", "bogus",
    ];
    for raw in rejected {
        let err = classify_time_period(raw).unwrap_err();
        assert_eq!(
            err,
            GreetingError::InvalidParameter {
                name: "usersTime",
                value: raw.to_string(),
            },
            "value: {raw:?}"
        );
    }
}

#[test]
fn classification_is_idempotent() {
    let first = classify_time_period("17:10").unwrap();
    let second = classify_time_period("17:10").unwrap();
    assert_eq!(first, second);
}
