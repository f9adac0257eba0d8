// crates/salve-core/src/error.rs
// ============================================================================
// Module: Salve Error Taxonomy
// Description: Shared error variants for greeting classification and lookup.
// Purpose: Provide deterministic, non-retryable request-level errors.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The greeting core fails in exactly three ways: a required parameter was
//! absent, a parameter was present but malformed, or the requested locale
//! carries no usable catalog entry after the fallback chain is exhausted.
//! All three are deterministic functions of the input and are surfaced to
//! the transport layer unchanged; none are transient.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors produced while classifying times or resolving greetings.
///
/// # Invariants
/// - Variants map one-to-one onto HTTP statuses at the transport boundary:
///   `MissingParameter` and `InvalidParameter` are client errors (400),
///   `LanguageNotSupported` is a lookup miss (404).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    /// A required request parameter was absent or empty.
    #[error("missing required parameter '{name}'")]
    MissingParameter {
        /// Name of the absent parameter.
        name: &'static str,
        /// Raw value as received (empty when the parameter was absent).
        value: String,
    },
    /// A request parameter was present but malformed.
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParameter {
        /// Name of the malformed parameter.
        name: &'static str,
        /// Offending raw value.
        value: String,
    },
    /// No usable catalog entry exists for the locale, even after fallback.
    #[error("language '{language}' is not supported")]
    LanguageNotSupported {
        /// Language code of the unsupported locale.
        language: String,
    },
}

impl GreetingError {
    /// Builds a missing-parameter error for the given parameter name.
    #[must_use]
    pub fn missing(name: &'static str, value: impl Into<String>) -> Self {
        Self::MissingParameter {
            name,
            value: value.into(),
        }
    }

    /// Builds an invalid-parameter error carrying the offending raw value.
    #[must_use]
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
