// crates/salve-config/src/messages.rs
// ============================================================================
// Module: Salve Message Loading
// Description: Per-locale message file loading and catalog construction.
// Purpose: Build the immutable greeting catalog and error templates once.
// Dependencies: salve-core, toml
// ============================================================================

//! ## Overview
//! Greeting texts live in one TOML file per locale inside the configured
//! messages directory: `messages.toml` holds the base error templates, and
//! `messages_xx.toml` / `messages_xx_YY.toml` hold the greetings for a
//! language or language-region pair. Files are flat string tables; message
//! keys contain dots and therefore must be quoted in TOML.
//!
//! The base file never serves greetings. It exists so the service can always
//! render "language not supported" meaningfully, which is also why loading
//! fails when the configured default locale does not cover every greeting
//! key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use salve_core::GreetingKey;
use salve_core::InMemoryMessageCatalog;
use salve_core::Locale;
use salve_core::MessageCatalog;

use crate::config::ConfigError;
use crate::config::MessagesConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base message filename holding the error templates.
const BASE_FILE_NAME: &str = "messages.toml";
/// Filename prefix for per-locale message files.
const LOCALE_FILE_PREFIX: &str = "messages_";
/// Message file extension.
const MESSAGE_FILE_EXTENSION: &str = "toml";
/// Maximum size of a single message file in bytes.
pub(crate) const MAX_MESSAGE_FILE_SIZE: usize = 64 * 1024;
/// Maximum number of message files in the directory.
pub(crate) const MAX_MESSAGE_FILES: usize = 256;
/// Key of the general error text in the base file.
pub const ERROR_GENERAL_KEY: &str = "greeting.error";
/// Key of the language-not-supported template in the base file.
pub const ERROR_LANGUAGE_NOT_SUPPORTED_KEY: &str = "greeting.error.language.notsupported";
/// Placeholder substituted with the unsupported language code.
const LANGUAGE_PLACEHOLDER: &str = "{language}";

// ============================================================================
// SECTION: Error Messages
// ============================================================================

/// Immutable error-message configuration constructed at startup.
///
/// Replaces the mutable global error text the service would otherwise reach
/// for; handlers receive this by shared reference.
#[derive(Debug, Clone)]
pub struct ErrorMessages {
    /// General error text for unexpected failures.
    pub general: String,
    /// Template for the language-not-supported error; contains `{language}`.
    pub language_not_supported: String,
}

impl ErrorMessages {
    /// Renders the language-not-supported message for a language code.
    #[must_use]
    pub fn render_language_not_supported(&self, language: &str) -> String {
        self.language_not_supported.replace(LANGUAGE_PLACEHOLDER, language)
    }
}

/// Catalog plus error templates produced by a successful load.
#[derive(Debug, Clone)]
pub struct LoadedMessages {
    /// Immutable greeting catalog.
    pub catalog: InMemoryMessageCatalog,
    /// Immutable error-message templates from the base file.
    pub errors: ErrorMessages,
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads every message file in the configured directory.
///
/// # Errors
///
/// Returns [`ConfigError`] when the directory cannot be read, a file is
/// malformed or oversized, a filename does not name a locale, the base file
/// or its error templates are missing, or the default locale does not cover
/// every greeting key.
pub fn load_messages(config: &MessagesConfig) -> Result<LoadedMessages, ConfigError> {
    let entries = fs::read_dir(&config.dir).map_err(|err| ConfigError::Io(err.to_string()))?;
    let mut catalog = InMemoryMessageCatalog::new();
    let mut base_table: Option<BTreeMap<String, String>> = None;
    let mut file_count = 0_usize;

    for entry in entries {
        let entry = entry.map_err(|err| ConfigError::Io(err.to_string()))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(MESSAGE_FILE_EXTENSION) {
            continue;
        }
        file_count += 1;
        if file_count > MAX_MESSAGE_FILES {
            return Err(ConfigError::Catalog("too many message files".to_string()));
        }
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ConfigError::Catalog("message filename is not utf-8".to_string()))?;
        let table = read_message_table(&path)?;
        if file_name == BASE_FILE_NAME {
            base_table = Some(table);
            continue;
        }
        let locale = locale_from_file_name(file_name)?;
        for (key, text) in table {
            catalog.insert(locale.tag(), key, text);
        }
    }

    let base = base_table.ok_or_else(|| {
        ConfigError::Catalog(format!("base message file '{BASE_FILE_NAME}' is missing"))
    })?;
    let errors = error_messages_from_base(&base)?;
    ensure_default_locale_coverage(&catalog, config)?;
    Ok(LoadedMessages {
        catalog,
        errors,
    })
}

/// Reads and parses a flat string table from a message file.
fn read_message_table(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    if bytes.len() > MAX_MESSAGE_FILE_SIZE {
        return Err(ConfigError::Catalog(format!(
            "message file '{}' exceeds size limit",
            path.display()
        )));
    }
    let content = std::str::from_utf8(&bytes).map_err(|_| {
        ConfigError::Catalog(format!("message file '{}' must be utf-8", path.display()))
    })?;
    toml::from_str(content).map_err(|err| {
        ConfigError::Catalog(format!("message file '{}' is malformed: {err}", path.display()))
    })
}

/// Derives the locale from a `messages_xx.toml` / `messages_xx_YY.toml` name.
fn locale_from_file_name(file_name: &str) -> Result<Locale, ConfigError> {
    let stem = file_name.strip_suffix(".toml").unwrap_or(file_name);
    let tag = stem.strip_prefix(LOCALE_FILE_PREFIX).ok_or_else(|| {
        ConfigError::Catalog(format!("message file '{file_name}' does not name a locale"))
    })?;
    Locale::parse(tag).map_err(|_| {
        ConfigError::Catalog(format!(
            "message file '{file_name}' has an invalid locale tag '{tag}'"
        ))
    })
}

/// Extracts and validates the error templates from the base table.
fn error_messages_from_base(
    base: &BTreeMap<String, String>,
) -> Result<ErrorMessages, ConfigError> {
    let general = base.get(ERROR_GENERAL_KEY).ok_or_else(|| {
        ConfigError::Catalog(format!("base message file is missing '{ERROR_GENERAL_KEY}'"))
    })?;
    let language_not_supported =
        base.get(ERROR_LANGUAGE_NOT_SUPPORTED_KEY).ok_or_else(|| {
            ConfigError::Catalog(format!(
                "base message file is missing '{ERROR_LANGUAGE_NOT_SUPPORTED_KEY}'"
            ))
        })?;
    if !language_not_supported.contains(LANGUAGE_PLACEHOLDER) {
        return Err(ConfigError::Catalog(format!(
            "'{ERROR_LANGUAGE_NOT_SUPPORTED_KEY}' must contain the \
             '{LANGUAGE_PLACEHOLDER}' placeholder"
        )));
    }
    Ok(ErrorMessages {
        general: general.clone(),
        language_not_supported: language_not_supported.clone(),
    })
}

/// Enforces full greeting-key coverage for the configured default locale.
fn ensure_default_locale_coverage(
    catalog: &InMemoryMessageCatalog,
    config: &MessagesConfig,
) -> Result<(), ConfigError> {
    let default_locale = config.default_locale()?;
    for key in GreetingKey::ALL {
        if catalog.lookup(key, &default_locale).is_none() {
            return Err(ConfigError::Catalog(format!(
                "default locale '{}' is missing greeting key '{}'",
                default_locale,
                key.as_str()
            )));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Coverage
// ============================================================================

/// Per-locale greeting-key coverage, for operator inspection.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    /// Canonical locale tag.
    pub tag: String,
    /// Greeting keys the locale resolves (directly or via its language).
    pub present: usize,
    /// Greeting keys the locale cannot resolve.
    pub missing: Vec<&'static str>,
}

/// Reports greeting-key coverage for every locale in the catalog.
#[must_use]
pub fn coverage_report(catalog: &InMemoryMessageCatalog) -> Vec<LocaleCoverage> {
    catalog
        .locale_tags()
        .into_iter()
        .filter_map(|tag| {
            let locale = Locale::parse(tag).ok()?;
            let missing: Vec<&'static str> = GreetingKey::ALL
                .into_iter()
                .filter(|key| catalog.lookup(*key, &locale).is_none())
                .map(GreetingKey::as_str)
                .collect();
            Some(LocaleCoverage {
                tag: tag.to_string(),
                present: GreetingKey::ALL.len() - missing.len(),
                missing,
            })
        })
        .collect()
}
