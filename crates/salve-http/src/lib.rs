// crates/salve-http/src/lib.rs
// ============================================================================
// Module: Salve HTTP
// Description: HTTP surface for the localized greeting service.
// Purpose: Route greeting requests through the core classifier and resolver.
// Dependencies: salve-core, salve-config, axum, tokio
// ============================================================================

//! ## Overview
//! Salve HTTP exposes two GET endpoints, `/api/greeting/timesensitive` and
//! `/api/greeting/timeinsensitive`. Handlers are thin: they validate query
//! parameters, invoke the pure core functions, and map results and errors to
//! HTTP responses. Each request emits one structured audit event.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api_error;
pub mod audit;
pub mod handlers;
pub mod server;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use api_error::ApiError;
pub use audit::NoopAuditSink;
pub use audit::RequestAuditEvent;
pub use audit::RequestAuditSink;
pub use audit::StderrAuditSink;
pub use server::BoundGreetingServer;
pub use server::GreetingServer;
pub use server::ServeError;
