// crates/salve-core/src/locale.rs
// ============================================================================
// Module: Salve Locale Model
// Description: Language/region pair identifying a translated text set.
// Purpose: Provide strict parsing and a canonical tag form for catalog keys.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Locale`] is a lowercase two-letter language code plus an optional
//! uppercase two-letter region code. Parsing accepts `xx`, `xx-YY`, and
//! `xx_YY` case-insensitively and rejects everything else. There is no
//! sentinel "unresolved" locale: absence of a `lang` parameter is handled
//! at the transport boundary before a `Locale` is ever constructed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::GreetingError;

// ============================================================================
// SECTION: Locale Type
// ============================================================================

/// Language plus optional region identifying which translated set to use.
///
/// # Invariants
/// - `language` is always two lowercase ASCII letters.
/// - `region`, when present, is always two uppercase ASCII letters.
/// - Two locales are equal iff both components match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Lowercase two-letter language code.
    language: String,
    /// Uppercase two-letter region code, when one was supplied.
    region: Option<String>,
}

impl Locale {
    /// Parses a `lang` parameter of the form `xx`, `xx-YY`, or `xx_YY`.
    ///
    /// Both components are case-insensitive on input and normalized on
    /// output. Leading and trailing whitespace is rejected, not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`GreetingError::InvalidParameter`] for the `lang` parameter
    /// when the value does not match the accepted forms.
    pub fn parse(raw: &str) -> Result<Self, GreetingError> {
        let (language, region) = match raw.split_once(['-', '_']) {
            Some((language, region)) => (language, Some(region)),
            None => (raw, None),
        };
        if !is_two_ascii_letters(language) {
            return Err(GreetingError::invalid("lang", raw));
        }
        let region = match region {
            Some(region) if is_two_ascii_letters(region) => {
                Some(region.to_ascii_uppercase())
            }
            Some(_) => return Err(GreetingError::invalid("lang", raw)),
            None => None,
        };
        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// Builds a locale from pre-normalized components, without validation.
    ///
    /// Intended for catalog construction where tags were already checked.
    #[must_use]
    pub fn new(language: impl Into<String>, region: Option<String>) -> Self {
        Self {
            language: language.into(),
            region,
        }
    }

    /// Returns the language component.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the region component when present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the canonical tag, `xx` or `xx-YY`.
    #[must_use]
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{region}", self.language),
            None => self.language.clone(),
        }
    }

    /// Returns the locale reduced to its bare language, dropping the region.
    #[must_use]
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            region: None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true when the value is exactly two ASCII letters.
fn is_two_ascii_letters(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|byte| byte.is_ascii_alphabetic())
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

    use super::Locale;
    use crate::error::GreetingError;

    #[test]
    fn parses_language_only() {
        let locale = Locale::parse("es").unwrap();
        assert_eq!(locale.language(), "es");
        assert_eq!(locale.region(), None);
        assert_eq!(locale.tag(), "es");
    }

    #[test]
    fn parses_hyphen_and_underscore_separators() {
        let hyphen = Locale::parse("en-US").unwrap();
        let underscore = Locale::parse("en_us").unwrap();
        assert_eq!(hyphen, underscore);
        assert_eq!(hyphen.tag(), "en-US");
    }

    #[test]
    fn normalizes_component_case() {
        let locale = Locale::parse("EN-us").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), Some("US"));
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["", "e", "eng", "en-", "en-U", "en-USA", "e1", "en-U1", "en US", " en"] {
            let err = Locale::parse(raw).unwrap_err();
            assert_eq!(err, GreetingError::invalid("lang", raw), "value: {raw:?}");
        }
    }

    #[test]
    fn language_only_drops_region() {
        let locale = Locale::parse("cs_CS").unwrap();
        assert_eq!(locale.language_only().tag(), "cs");
    }
}
