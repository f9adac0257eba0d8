// crates/salve-core/src/time_period.rs
// ============================================================================
// Module: Salve Time-Period Classification
// Description: Coarse period-of-day buckets derived from an "HH:mm" string.
// Purpose: Map a user-supplied clock time onto greeting selection windows.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The classifier parses a strict `HH:mm` string and buckets it into one of
//! four periods using three fixed, non-overlapping, inclusive windows. The
//! windows are compile-time constants; changing them is an observable
//! behavior change. Malformed input is rejected, never silently mapped to
//! [`TimePeriod::General`]. The core never reads wall-clock time; callers
//! supply the time of day explicitly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::error::GreetingError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Start of the morning window (05:00), in minutes since midnight.
const MORNING_FROM: u16 = 5 * 60;
/// End of the morning window (11:59), inclusive.
const MORNING_TO: u16 = 11 * 60 + 59;
/// Start of the afternoon window (12:00).
const AFTERNOON_FROM: u16 = 12 * 60;
/// End of the afternoon window (16:59), inclusive.
const AFTERNOON_TO: u16 = 16 * 60 + 59;
/// Start of the evening window (17:00).
const EVENING_FROM: u16 = 17 * 60;
/// End of the evening window (21:59), inclusive.
const EVENING_TO: u16 = 21 * 60 + 59;

// ============================================================================
// SECTION: Time Period
// ============================================================================

/// Coarse period-of-day bucket used to select among greeting variants.
///
/// # Invariants
/// - Exactly one value is produced per valid time-of-day input.
/// - `General` is the catch-all for times outside every named window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    /// 05:00 through 11:59, inclusive.
    Morning,
    /// 12:00 through 16:59, inclusive.
    Afternoon,
    /// 17:00 through 21:59, inclusive.
    Evening,
    /// Any valid time outside the named windows.
    General,
}

impl TimePeriod {
    /// Returns a stable label for the period.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::General => "general",
        }
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Classifies a strict `HH:mm` time string into a [`TimePeriod`].
///
/// The windows are checked in order; they are disjoint, so ordering matters
/// only for clarity. Both window boundaries are inclusive.
///
/// # Errors
///
/// Returns [`GreetingError::InvalidParameter`] for the `usersTime` parameter
/// when the value is not a two-digit hour in 00–23, a colon, and a two-digit
/// minute in 00–59.
pub fn classify_time_period(users_time: &str) -> Result<TimePeriod, GreetingError> {
    let minutes = parse_minutes_of_day(users_time)
        .ok_or_else(|| GreetingError::invalid("usersTime", users_time))?;
    let period = match minutes {
        MORNING_FROM..=MORNING_TO => TimePeriod::Morning,
        AFTERNOON_FROM..=AFTERNOON_TO => TimePeriod::Afternoon,
        EVENING_FROM..=EVENING_TO => TimePeriod::Evening,
        _ => TimePeriod::General,
    };
    Ok(period)
}

/// Parses a strict `HH:mm` string into minutes since midnight.
///
/// Field widths are fixed: exactly two digits, a colon, and two digits.
fn parse_minutes_of_day(value: &str) -> Option<u16> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let hour = parse_two_digits(bytes[0], bytes[1])?;
    let minute = parse_two_digits(bytes[3], bytes[4])?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Parses a fixed-width two-digit ASCII field.
const fn parse_two_digits(tens: u8, units: u8) -> Option<u16> {
    if tens.is_ascii_digit() && units.is_ascii_digit() {
        Some((tens - b'0') as u16 * 10 + (units - b'0') as u16)
    } else {
        None
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        reason = "Test-only assertions."
    )]

    use super::TimePeriod;
    use super::classify_time_period;

    #[test]
    fn labels_are_stable() {
        assert_eq!(TimePeriod::Morning.as_str(), "morning");
        assert_eq!(TimePeriod::Afternoon.as_str(), "afternoon");
        assert_eq!(TimePeriod::Evening.as_str(), "evening");
        assert_eq!(TimePeriod::General.as_str(), "general");
    }

    #[test]
    fn midnight_is_general() {
        assert_eq!(classify_time_period("00:00").unwrap(), TimePeriod::General);
    }

    #[test]
    fn last_minute_of_day_is_general() {
        assert_eq!(classify_time_period("23:59").unwrap(), TimePeriod::General);
    }
}
