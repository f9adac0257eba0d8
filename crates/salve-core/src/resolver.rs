// crates/salve-core/src/resolver.rs
// ============================================================================
// Module: Salve Greeting Resolver
// Description: Best-match greeting lookup with a fixed two-level fallback.
// Purpose: Degrade gracefully for locales with coarse-only catalog coverage.
// Dependencies: crate::{catalog, error, locale, time_period}
// ============================================================================

//! ## Overview
//! The resolver turns a period of day (or none, in time-insensitive mode)
//! and a locale into greeting text. Lookup is chained: the specific key for
//! the request, then the general time-sensitive key, then failure with
//! [`GreetingError::LanguageNotSupported`]. A locale may define only the
//! coarse general entry and still be fully served; the resolution source
//! records when that degraded path was taken so the transport layer can
//! observe it. Resolution is pure and idempotent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::GreetingKey;
use crate::catalog::MessageCatalog;
use crate::error::GreetingError;
use crate::locale::Locale;
use crate::time_period::TimePeriod;

// ============================================================================
// SECTION: Resolution Types
// ============================================================================

/// Where in the fallback chain the greeting text was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The first key tried held text for the locale.
    Exact,
    /// The general time-sensitive entry served as fallback.
    GeneralFallback,
}

/// A resolved greeting plus the chain position that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingResolution {
    /// Localized greeting text.
    pub text: String,
    /// Chain position that produced the text.
    pub source: ResolutionSource,
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Greeting resolver over a shared read-only message catalog.
#[derive(Clone)]
pub struct GreetingResolver {
    /// Catalog consulted for every lookup.
    catalog: Arc<dyn MessageCatalog>,
}

impl GreetingResolver {
    /// Builds a resolver over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn MessageCatalog>) -> Self {
        Self {
            catalog,
        }
    }

    /// Resolves the greeting for a period of day and locale.
    ///
    /// Tries the period's own key first, then the general time-sensitive
    /// key. A hit on the second level is reported as
    /// [`ResolutionSource::GeneralFallback`].
    ///
    /// # Errors
    ///
    /// Returns [`GreetingError::LanguageNotSupported`] when neither level
    /// holds text for the locale.
    pub fn resolve_time_sensitive(
        &self,
        period: TimePeriod,
        locale: &Locale,
    ) -> Result<GreetingResolution, GreetingError> {
        let key = match period {
            TimePeriod::Morning => GreetingKey::Morning,
            TimePeriod::Afternoon => GreetingKey::Afternoon,
            TimePeriod::Evening => GreetingKey::Evening,
            TimePeriod::General => GreetingKey::GeneralTimeSensitive,
        };
        self.resolve_chain(key, locale)
    }

    /// Resolves the greeting for time-insensitive mode.
    ///
    /// Tries the general time-insensitive key, then the general
    /// time-sensitive key as a secondary generic greeting.
    ///
    /// # Errors
    ///
    /// Returns [`GreetingError::LanguageNotSupported`] when neither level
    /// holds text for the locale.
    pub fn resolve_time_insensitive(
        &self,
        locale: &Locale,
    ) -> Result<GreetingResolution, GreetingError> {
        self.resolve_chain(GreetingKey::GeneralTimeInsensitive, locale)
    }

    /// Walks the two-level chain: `key`, then the general time-sensitive key.
    fn resolve_chain(
        &self,
        key: GreetingKey,
        locale: &Locale,
    ) -> Result<GreetingResolution, GreetingError> {
        if let Some(text) = self.catalog.lookup(key, locale) {
            return Ok(GreetingResolution {
                text: text.to_string(),
                source: ResolutionSource::Exact,
            });
        }
        if key != GreetingKey::GeneralTimeSensitive
            && let Some(text) = self.catalog.lookup(GreetingKey::GeneralTimeSensitive, locale)
        {
            return Ok(GreetingResolution {
                text: text.to_string(),
                source: ResolutionSource::GeneralFallback,
            });
        }
        Err(GreetingError::LanguageNotSupported {
            language: locale.language().to_string(),
        })
    }
}
