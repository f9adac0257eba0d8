// crates/salve-http/src/handlers.rs
// ============================================================================
// Module: Salve Request Handlers
// Description: Query validation and response mapping for greeting endpoints.
// Purpose: Keep transport glue thin around the pure core functions.
// Dependencies: salve-core, axum, serde
// ============================================================================

//! ## Overview
//! Handlers validate parameters in a fixed order — missing `lang`, missing
//! `usersTime`, malformed `lang`, malformed `usersTime` — then invoke the
//! classifier and resolver. A missing or empty `lang` is rejected here,
//! before any locale is constructed; the resolver never sees a sentinel
//! value. Success is a plain-text greeting body; failure is an
//! [`ApiError`] JSON body.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use axum::Json;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use salve_core::GreetingError;
use salve_core::GreetingResolution;
use salve_core::Locale;
use salve_core::ResolutionSource;
use salve_core::classify_time_period;
use serde::Deserialize;

use crate::api_error::ApiError;
use crate::audit::RequestAuditEvent;
use crate::server::ServerState;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Stable audit event name for greeting requests.
const AUDIT_EVENT: &str = "greeting_request";
/// Endpoint label for the time-sensitive route.
pub(crate) const TIME_SENSITIVE_ENDPOINT: &str = "timesensitive";
/// Endpoint label for the time-insensitive route.
pub(crate) const TIME_INSENSITIVE_ENDPOINT: &str = "timeinsensitive";

// ============================================================================
// SECTION: Query Types
// ============================================================================

/// Query parameters for the time-sensitive endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TimeSensitiveQuery {
    /// Requested time of day, `HH:mm`.
    #[serde(rename = "usersTime")]
    pub(crate) users_time: Option<String>,
    /// Requested locale tag.
    pub(crate) lang: Option<String>,
}

/// Query parameters for the time-insensitive endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TimeInsensitiveQuery {
    /// Requested locale tag.
    pub(crate) lang: Option<String>,
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Handles `GET /api/greeting/timesensitive`.
pub(crate) async fn time_sensitive(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<TimeSensitiveQuery>,
) -> Response {
    let outcome =
        resolve_time_sensitive(&state, query.lang.as_deref(), query.users_time.as_deref());
    respond(&state, TIME_SENSITIVE_ENDPOINT, query.lang, query.users_time, outcome)
}

/// Handles `GET /api/greeting/timeinsensitive`.
pub(crate) async fn time_insensitive(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<TimeInsensitiveQuery>,
) -> Response {
    let outcome = resolve_time_insensitive(&state, query.lang.as_deref());
    respond(&state, TIME_INSENSITIVE_ENDPOINT, query.lang, None, outcome)
}

// ============================================================================
// SECTION: Request Logic
// ============================================================================

/// Validates parameters and resolves the time-sensitive greeting.
fn resolve_time_sensitive(
    state: &ServerState,
    lang: Option<&str>,
    users_time: Option<&str>,
) -> Result<GreetingResolution, GreetingError> {
    let lang = require_param("lang", lang)?;
    let users_time = require_param("usersTime", users_time)?;
    let locale = Locale::parse(lang)?;
    let period = classify_time_period(users_time)?;
    state.resolver.resolve_time_sensitive(period, &locale)
}

/// Validates parameters and resolves the time-insensitive greeting.
fn resolve_time_insensitive(
    state: &ServerState,
    lang: Option<&str>,
) -> Result<GreetingResolution, GreetingError> {
    let lang = require_param("lang", lang)?;
    let locale = Locale::parse(lang)?;
    state.resolver.resolve_time_insensitive(&locale)
}

/// Rejects absent or empty parameters before any parsing happens.
fn require_param<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, GreetingError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GreetingError::missing(name, "")),
    }
}

/// Maps the outcome onto a response and records the audit event.
fn respond(
    state: &ServerState,
    endpoint: &'static str,
    lang: Option<String>,
    users_time: Option<String>,
    outcome: Result<GreetingResolution, GreetingError>,
) -> Response {
    match outcome {
        Ok(resolution) => {
            state.audit.record(&RequestAuditEvent {
                event: AUDIT_EVENT,
                endpoint,
                lang,
                users_time,
                status: StatusCode::OK.as_u16(),
                fallback: resolution.source == ResolutionSource::GeneralFallback,
            });
            (StatusCode::OK, resolution.text).into_response()
        }
        Err(error) => {
            let (status, payload) = ApiError::from_greeting(&state.errors, &error);
            state.audit.record(&RequestAuditEvent {
                event: AUDIT_EVENT,
                endpoint,
                lang,
                users_time,
                status: status.as_u16(),
                fallback: false,
            });
            (status, Json(payload)).into_response()
        }
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

    use std::sync::Arc;
    use std::sync::Mutex;

    use axum::http::StatusCode;
    use salve_config::ErrorMessages;
    use salve_core::GreetingError;
    use salve_core::GreetingKey;
    use salve_core::GreetingResolver;
    use salve_core::InMemoryMessageCatalog;

    use super::require_param;
    use super::resolve_time_insensitive;
    use super::resolve_time_sensitive;
    use super::respond;
    use crate::audit::RequestAuditEvent;
    use crate::audit::RequestAuditSink;
    use crate::server::ServerState;

    /// Audit sink that captures events for assertions.
    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<RequestAuditEvent>>,
    }

    impl RequestAuditSink for RecordingSink {
        fn record(&self, event: &RequestAuditEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event.clone());
            }
        }
    }

    fn state_with_sink(sink: Arc<RecordingSink>) -> ServerState {
        let mut catalog = InMemoryMessageCatalog::new();
        catalog.insert("en", GreetingKey::Morning.as_str(), "Good morning!");
        catalog.insert("en", GreetingKey::Evening.as_str(), "Good evening!");
        catalog.insert("en", GreetingKey::GeneralTimeSensitive.as_str(), "Hello!");
        catalog.insert("en", GreetingKey::GeneralTimeInsensitive.as_str(), "Hi!");
        catalog.insert("es", GreetingKey::GeneralTimeSensitive.as_str(), "¡Hola!");
        ServerState {
            resolver: GreetingResolver::new(Arc::new(catalog)),
            errors: ErrorMessages {
                general: "Unexpected error".to_string(),
                language_not_supported: "Language '{language}' is not supported".to_string(),
            },
            audit: sink,
        }
    }

    fn state() -> ServerState {
        state_with_sink(Arc::new(RecordingSink::default()))
    }

    #[test]
    fn missing_lang_takes_precedence_over_missing_time() {
        let err = resolve_time_sensitive(&state(), None, None).unwrap_err();
        assert_eq!(err, GreetingError::missing("lang", ""));
    }

    #[test]
    fn empty_lang_is_treated_as_missing() {
        let err = resolve_time_sensitive(&state(), Some(""), Some("18:36")).unwrap_err();
        assert_eq!(err, GreetingError::missing("lang", ""));
    }

    #[test]
    fn missing_time_is_reported_before_lang_parsing() {
        let err = resolve_time_sensitive(&state(), Some("not-a-locale"), None).unwrap_err();
        assert_eq!(err, GreetingError::missing("usersTime", ""));
    }

    #[test]
    fn malformed_lang_is_invalid() {
        let err = resolve_time_sensitive(&state(), Some("english"), Some("18:36")).unwrap_err();
        assert_eq!(err, GreetingError::invalid("lang", "english"));
    }

    #[test]
    fn malformed_time_is_invalid() {
        let err = resolve_time_sensitive(&state(), Some("en"), Some("bogus")).unwrap_err();
        assert_eq!(err, GreetingError::invalid("usersTime", "bogus"));
    }

    #[test]
    fn evening_request_resolves_per_period_text() {
        let resolution = resolve_time_sensitive(&state(), Some("en"), Some("18:36")).unwrap();
        assert_eq!(resolution.text, "Good evening!");
    }

    #[test]
    fn time_insensitive_requires_only_lang() {
        let resolution = resolve_time_insensitive(&state(), Some("en")).unwrap();
        assert_eq!(resolution.text, "Hi!");
        let err = resolve_time_insensitive(&state(), None).unwrap_err();
        assert_eq!(err, GreetingError::missing("lang", ""));
    }

    #[test]
    fn require_param_accepts_non_empty_values() {
        assert_eq!(require_param("lang", Some("en")).unwrap(), "en");
    }

    #[test]
    fn respond_records_success_and_fallback() {
        let sink = Arc::new(RecordingSink::default());
        let state = state_with_sink(sink.clone());
        let outcome = resolve_time_sensitive(&state, Some("es"), Some("08:00"));
        let response = respond(
            &state,
            super::TIME_SENSITIVE_ENDPOINT,
            Some("es".to_string()),
            Some("08:00".to_string()),
            outcome,
        );
        assert_eq!(response.status(), StatusCode::OK);
        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].status, 200);
        assert!(events[0].fallback, "general greeting served for a morning request");
    }

    #[test]
    fn respond_records_error_statuses() {
        let sink = Arc::new(RecordingSink::default());
        let state = state_with_sink(sink.clone());
        let outcome = resolve_time_sensitive(&state, Some("ch"), Some("08:00"));
        let response = respond(
            &state,
            super::TIME_SENSITIVE_ENDPOINT,
            Some("ch".to_string()),
            Some("08:00".to_string()),
            outcome,
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let events = sink.events.lock().unwrap();
        assert_eq!(events[0].status, 404);
        assert!(!events[0].fallback);
    }
}
