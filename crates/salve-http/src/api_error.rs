// crates/salve-http/src/api_error.rs
// ============================================================================
// Module: Salve API Error Payload
// Description: Structured JSON error body for failed greeting requests.
// Purpose: Map core errors onto HTTP statuses with stable payload fields.
// Dependencies: salve-core, salve-config, axum, serde, time
// ============================================================================

//! ## Overview
//! Every failed request returns an [`ApiError`]: the numeric status, a UTC
//! RFC 3339 timestamp, a short human-readable message, and a debug detail.
//! Client errors carry the structured core error; unexpected internal
//! failures carry the configured general error text with the raw detail
//! attached, never partial output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use axum::http::StatusCode;
use salve_config::ErrorMessages;
use salve_core::GreetingError;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Error Payload
// ============================================================================

/// JSON body returned for failed greeting requests.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Numeric HTTP status.
    pub status: u16,
    /// UTC timestamp of the failure, RFC 3339.
    pub timestamp: String,
    /// Short description of the error.
    pub message: String,
    /// Detailed, debug-oriented description.
    pub debug_message: String,
}

impl ApiError {
    /// Builds the payload and status for a core greeting error.
    #[must_use]
    pub fn from_greeting(errors: &ErrorMessages, error: &GreetingError) -> (StatusCode, Self) {
        let (status, message) = match error {
            GreetingError::MissingParameter {
                ..
            }
            | GreetingError::InvalidParameter {
                ..
            } => (StatusCode::BAD_REQUEST, error.to_string()),
            GreetingError::LanguageNotSupported {
                language,
            } => (StatusCode::NOT_FOUND, errors.render_language_not_supported(language)),
        };
        let debug_message = match error {
            GreetingError::MissingParameter {
                name,
                value,
            }
            | GreetingError::InvalidParameter {
                name,
                value,
            } => format!("parameter '{name}' received value '{value}'"),
            GreetingError::LanguageNotSupported {
                ..
            } => error.to_string(),
        };
        (status, Self::with_status(status, message, debug_message))
    }

    /// Builds the payload for an unexpected internal failure.
    #[must_use]
    pub fn internal(errors: &ErrorMessages, detail: &str) -> (StatusCode, Self) {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (status, Self::with_status(status, errors.general.clone(), detail.to_string()))
    }

    /// Builds a payload with the current UTC timestamp.
    fn with_status(status: StatusCode, message: String, debug_message: String) -> Self {
        Self {
            status: status.as_u16(),
            timestamp: now_rfc3339(),
            message,
            debug_message,
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Formats the current UTC time as RFC 3339.
///
/// Formatting the current instant cannot fail in practice; an empty string
/// is emitted rather than propagating a formatting error into the payload.
fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
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

    use axum::http::StatusCode;
    use salve_config::ErrorMessages;
    use salve_core::GreetingError;

    use super::ApiError;

    fn errors() -> ErrorMessages {
        ErrorMessages {
            general: "Unexpected error".to_string(),
            language_not_supported: "Language '{language}' is not supported".to_string(),
        }
    }

    #[test]
    fn missing_parameter_maps_to_bad_request() {
        let error = GreetingError::missing("lang", "");
        let (status, payload) = ApiError::from_greeting(&errors(), &error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.status, 400);
        assert_eq!(payload.message, "missing required parameter 'lang'");
    }

    #[test]
    fn invalid_parameter_carries_the_raw_value() {
        let error = GreetingError::invalid("usersTime", "bogus");
        let (status, payload) = ApiError::from_greeting(&errors(), &error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(payload.debug_message.contains("bogus"));
    }

    #[test]
    fn language_not_supported_maps_to_not_found_with_rendered_message() {
        let error = GreetingError::LanguageNotSupported {
            language: "ch".to_string(),
        };
        let (status, payload) = ApiError::from_greeting(&errors(), &error);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload.message, "Language 'ch' is not supported");
    }

    #[test]
    fn internal_failure_uses_the_general_text() {
        let (status, payload) = ApiError::internal(&errors(), "listener dropped");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(payload.message, "Unexpected error");
        assert_eq!(payload.debug_message, "listener dropped");
    }

    #[test]
    fn timestamp_is_populated() {
        let (_, payload) = ApiError::internal(&errors(), "detail");
        assert!(payload.timestamp.contains('T'));
    }
}
