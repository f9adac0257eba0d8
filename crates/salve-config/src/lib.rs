// crates/salve-config/src/lib.rs
// ============================================================================
// Module: Salve Config Library
// Description: Public API surface for configuration and message loading.
// Purpose: Expose config types, validation, and catalog construction.
// Dependencies: crate::{config, messages}
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits and
//! fail-closed validation. Message files — one per locale — are loaded once
//! at startup into an immutable catalog alongside the error-message
//! templates used by the HTTP layer.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod messages;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::MessagesConfig;
pub use config::SalveConfig;
pub use config::ServerConfig;
pub use messages::ErrorMessages;
pub use messages::LoadedMessages;
pub use messages::LocaleCoverage;
pub use messages::coverage_report;
pub use messages::load_messages;
