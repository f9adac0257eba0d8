// crates/salve-core/src/lib.rs
// ============================================================================
// Module: Salve Core Library
// Description: Public API surface for the Salve greeting core.
// Purpose: Expose locale, time-period, catalog, and resolver types.
// Dependencies: crate::{catalog, error, locale, resolver, time_period}
// ============================================================================

//! ## Overview
//! Salve core provides the deterministic greeting logic: classifying a clock
//! time into a coarse period of day and resolving the best localized greeting
//! text for a locale through a fixed fallback chain. It is transport-agnostic
//! and integrates through the [`MessageCatalog`] interface rather than
//! embedding into any HTTP framework.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod locale;
pub mod resolver;
pub mod time_period;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::GreetingKey;
pub use catalog::InMemoryMessageCatalog;
pub use catalog::MessageCatalog;
pub use error::GreetingError;
pub use locale::Locale;
pub use resolver::GreetingResolution;
pub use resolver::GreetingResolver;
pub use resolver::ResolutionSource;
pub use time_period::TimePeriod;
pub use time_period::classify_time_period;
