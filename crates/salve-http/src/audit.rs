// crates/salve-http/src/audit.rs
// ============================================================================
// Module: Salve Request Auditing
// Description: Structured per-request audit events and sinks.
// Purpose: Make request outcomes and degraded fallbacks observable.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Each greeting request emits exactly one [`RequestAuditEvent`]. The stderr
//! sink writes events as JSON lines so deployments can collect them without
//! a logging framework; the noop sink keeps tests quiet. The `fallback`
//! field marks degraded-but-successful resolutions where the general
//! greeting served in place of a missing per-period entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// SECTION: Audit Event
// ============================================================================

/// Outcome record for a single greeting request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestAuditEvent {
    /// Stable event name for log filtering.
    pub event: &'static str,
    /// Endpoint label (`timesensitive` or `timeinsensitive`).
    pub endpoint: &'static str,
    /// Raw `lang` parameter as received.
    pub lang: Option<String>,
    /// Raw `usersTime` parameter as received.
    pub users_time: Option<String>,
    /// Numeric HTTP status of the response.
    pub status: u16,
    /// True when the general greeting served as fallback for the locale.
    pub fallback: bool,
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Receiver for request audit events.
pub trait RequestAuditSink: Send + Sync {
    /// Records one request outcome.
    fn record(&self, event: &RequestAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl RequestAuditSink for StderrAuditSink {
    #[allow(clippy::print_stderr, reason = "Stderr is this sink's output surface.")]
    fn record(&self, event: &RequestAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            eprintln!("{payload}");
        }
    }
}

/// No-op audit sink for tests.
pub struct NoopAuditSink;

impl RequestAuditSink for NoopAuditSink {
    fn record(&self, _event: &RequestAuditEvent) {}
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

    use super::RequestAuditEvent;

    #[test]
    fn events_serialize_as_flat_json() {
        let event = RequestAuditEvent {
            event: "greeting_request",
            endpoint: "timesensitive",
            lang: Some("en-US".to_string()),
            users_time: Some("18:36".to_string()),
            status: 200,
            fallback: false,
        };
        let payload = serde_json::to_value(&event).unwrap();
        assert_eq!(payload["endpoint"], "timesensitive");
        assert_eq!(payload["status"], 200);
        assert_eq!(payload["fallback"], false);
    }
}
