// crates/salve-core/src/catalog.rs
// ============================================================================
// Module: Salve Message Catalog
// Description: Read-only store of localized greeting strings.
// Purpose: Provide tagged present/absent lookup keyed by message key + locale.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The catalog maps `(message key, locale)` pairs to localized text. Lookup
//! is an explicit [`Option`]: a missing pair is distinguishable from a
//! present-but-empty string, and no sentinel value can collide with
//! legitimate content. A single lookup walks the locale chain
//! `language-REGION` then `language`; key-level fallback is the resolver's
//! concern, not the catalog's.
//!
//! The catalog is loaded once at process start and is read-only for the
//! lifetime of the process, so unsynchronized concurrent reads are safe.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::locale::Locale;

// ============================================================================
// SECTION: Greeting Keys
// ============================================================================

/// Message keys naming the greeting rows in the catalog.
///
/// # Invariants
/// - String forms are stable; they double as keys in message files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingKey {
    /// Morning greeting, time-sensitive mode.
    Morning,
    /// Afternoon greeting, time-sensitive mode.
    Afternoon,
    /// Evening greeting, time-sensitive mode.
    Evening,
    /// Catch-all greeting, time-sensitive mode.
    GeneralTimeSensitive,
    /// Catch-all greeting, time-insensitive mode.
    GeneralTimeInsensitive,
}

impl GreetingKey {
    /// All greeting keys, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::GeneralTimeSensitive,
        Self::GeneralTimeInsensitive,
    ];

    /// Returns the stable message-file key for this greeting.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "greeting.timesensitive.morning",
            Self::Afternoon => "greeting.timesensitive.afternoon",
            Self::Evening => "greeting.timesensitive.evening",
            Self::GeneralTimeSensitive => "greeting.timesensitive.general",
            Self::GeneralTimeInsensitive => "greeting.timesinsensitive.general",
        }
    }
}

// ============================================================================
// SECTION: Catalog Interface
// ============================================================================

/// Read-only lookup capability consumed by the greeting resolver.
///
/// # Invariants
/// - Implementations must be safe for unsynchronized concurrent reads.
/// - A `None` return means the pair is absent for the locale and its bare
///   language; it never encodes an empty-but-present entry.
pub trait MessageCatalog: Send + Sync {
    /// Looks up the text for a greeting key and locale.
    ///
    /// Tries the exact locale first, then the bare language. Returns `None`
    /// when neither holds the key.
    fn lookup(&self, key: GreetingKey, locale: &Locale) -> Option<&str>;
}

// ============================================================================
// SECTION: In-Memory Catalog
// ============================================================================

/// Immutable in-memory catalog keyed by locale tag, then message key.
///
/// Built once at startup from message files; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageCatalog {
    /// Message tables keyed by canonical locale tag (`en`, `en-US`).
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl InMemoryMessageCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a message under a locale tag.
    ///
    /// Keys outside [`GreetingKey::ALL`] are stored but never returned by
    /// [`MessageCatalog::lookup`]; loaders may pass message files through
    /// unfiltered.
    pub fn insert(
        &mut self,
        locale_tag: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.locales
            .entry(locale_tag.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Returns all locale tags present in the catalog, in sorted order.
    #[must_use]
    pub fn locale_tags(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// Looks up a raw key under an exact locale tag, without chain walking.
    #[must_use]
    pub fn get_raw(&self, locale_tag: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale_tag)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl MessageCatalog for InMemoryMessageCatalog {
    fn lookup(&self, key: GreetingKey, locale: &Locale) -> Option<&str> {
        if let Some(text) = self.get_raw(&locale.tag(), key.as_str()) {
            return Some(text);
        }
        if locale.region().is_some() {
            return self.get_raw(locale.language(), key.as_str());
        }
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

    use super::GreetingKey;
    use super::InMemoryMessageCatalog;
    use super::MessageCatalog;
    use crate::locale::Locale;

    #[test]
    fn key_strings_are_stable() {
        assert_eq!(GreetingKey::Morning.as_str(), "greeting.timesensitive.morning");
        assert_eq!(
            GreetingKey::GeneralTimeInsensitive.as_str(),
            "greeting.timesinsensitive.general"
        );
    }

    #[test]
    fn exact_locale_wins_over_bare_language() {
        let mut catalog = InMemoryMessageCatalog::new();
        catalog.insert("en", GreetingKey::Morning.as_str(), "Good morning");
        catalog.insert("en-US", GreetingKey::Morning.as_str(), "Mornin'");
        let locale = Locale::parse("en-US").unwrap();
        assert_eq!(catalog.lookup(GreetingKey::Morning, &locale), Some("Mornin'"));
    }

    #[test]
    fn region_misses_fall_through_to_bare_language() {
        let mut catalog = InMemoryMessageCatalog::new();
        catalog.insert("en", GreetingKey::Evening.as_str(), "Good evening");
        let locale = Locale::parse("en-GB").unwrap();
        assert_eq!(catalog.lookup(GreetingKey::Evening, &locale), Some("Good evening"));
    }

    #[test]
    fn absent_pair_is_none_even_when_empty_string_present() {
        let mut catalog = InMemoryMessageCatalog::new();
        catalog.insert("en", GreetingKey::Morning.as_str(), "");
        let locale = Locale::parse("en").unwrap();
        assert_eq!(catalog.lookup(GreetingKey::Morning, &locale), Some(""));
        assert_eq!(catalog.lookup(GreetingKey::Evening, &locale), None);
    }

    #[test]
    fn bare_language_lookup_does_not_scan_regions() {
        let mut catalog = InMemoryMessageCatalog::new();
        catalog.insert("en-US", GreetingKey::Morning.as_str(), "Mornin'");
        let locale = Locale::parse("en").unwrap();
        assert_eq!(catalog.lookup(GreetingKey::Morning, &locale), None);
    }
}
