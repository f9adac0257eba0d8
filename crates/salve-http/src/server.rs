// crates/salve-http/src/server.rs
// ============================================================================
// Module: Salve HTTP Server
// Description: Router construction and serving for the greeting endpoints.
// Purpose: Bind the configured address and dispatch requests to handlers.
// Dependencies: salve-core, salve-config, axum, tokio
// ============================================================================

//! ## Overview
//! The server owns the shared request state — resolver, error templates, and
//! audit sink — behind an [`Arc`] and serves the two greeting routes with
//! `axum` over a `tokio` TCP listener. Binding and serving are split so
//! tests can bind port zero and read back the ephemeral address.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use salve_config::ErrorMessages;
use salve_config::ServerConfig;
use salve_core::GreetingResolver;
use salve_core::MessageCatalog;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::audit::RequestAuditSink;
use crate::handlers;

// ============================================================================
// SECTION: Server State
// ============================================================================

/// Shared state for greeting request handlers.
pub(crate) struct ServerState {
    /// Greeting resolver over the immutable catalog.
    pub(crate) resolver: GreetingResolver,
    /// Immutable error-message templates.
    pub(crate) errors: ErrorMessages,
    /// Sink receiving one audit event per request.
    pub(crate) audit: Arc<dyn RequestAuditSink>,
}

// ============================================================================
// SECTION: Greeting Server
// ============================================================================

/// HTTP server for the localized greeting service.
pub struct GreetingServer {
    /// Address the server binds to.
    bind_addr: SocketAddr,
    /// Shared handler state.
    state: Arc<ServerState>,
}

impl GreetingServer {
    /// Builds a server from configuration and pre-loaded collaborators.
    #[must_use]
    pub fn new(
        config: &ServerConfig,
        catalog: Arc<dyn MessageCatalog>,
        errors: ErrorMessages,
        audit: Arc<dyn RequestAuditSink>,
    ) -> Self {
        Self {
            bind_addr: config.bind_addr,
            state: Arc::new(ServerState {
                resolver: GreetingResolver::new(catalog),
                errors,
                audit,
            }),
        }
    }

    /// Builds the router with both greeting routes.
    fn router(&self) -> Router {
        Router::new()
            .route("/api/greeting/timesensitive", get(handlers::time_sensitive))
            .route("/api/greeting/timeinsensitive", get(handlers::time_insensitive))
            .with_state(self.state.clone())
    }

    /// Binds the configured address without accepting connections yet.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Bind`] when the address cannot be bound.
    pub async fn bind(&self) -> Result<BoundGreetingServer, ServeError> {
        let listener = TcpListener::bind(self.bind_addr)
            .await
            .map_err(|err| ServeError::Bind(err.to_string()))?;
        Ok(BoundGreetingServer {
            listener,
            router: self.router(),
        })
    }

    /// Binds and serves until the task is cancelled or the listener fails.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServeError> {
        self.bind().await?.serve().await
    }
}

/// A greeting server bound to a concrete local address.
pub struct BoundGreetingServer {
    /// Bound TCP listener.
    listener: TcpListener,
    /// Router serving the greeting endpoints.
    router: Router,
}

impl BoundGreetingServer {
    /// Returns the bound local address.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Bind`] when the listener cannot report it.
    pub fn local_addr(&self) -> Result<SocketAddr, ServeError> {
        self.listener.local_addr().map_err(|err| ServeError::Bind(err.to_string()))
    }

    /// Serves requests until the task is cancelled or the listener fails.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Serve`] when the server loop fails.
    pub async fn serve(self) -> Result<(), ServeError> {
        axum::serve(self.listener, self.router)
            .await
            .map_err(|err| ServeError::Serve(err.to_string()))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// HTTP serving errors.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listener could not be bound or inspected.
    #[error("bind error: {0}")]
    Bind(String),
    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(String),
}
