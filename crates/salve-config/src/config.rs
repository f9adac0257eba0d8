// crates/salve-config/src/config.rs
// ============================================================================
// Module: Salve Configuration
// Description: Configuration loading and validation for the greeting service.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: salve-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file resolved from an explicit path,
//! the `SALVE_CONFIG` environment variable, or `salve.toml` in the working
//! directory, in that order. Missing or invalid configuration fails closed;
//! the server never starts with a partially validated config.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use salve_core::Locale;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "salve.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SALVE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum total config path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default HTTP bind address.
const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);
/// Default message directory relative to the working directory.
const DEFAULT_MESSAGES_DIR: &str = "messages";
/// Default locale that must carry full greeting coverage.
const DEFAULT_DEFAULT_LOCALE: &str = "en";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Salve service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalveConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Message catalog configuration.
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl SalveConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.messages.validate()?;
        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

/// Message catalog configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagesConfig {
    /// Directory holding the per-locale message files.
    #[serde(default = "default_messages_dir")]
    pub dir: PathBuf,
    /// Locale that must cover every greeting key at load time.
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            dir: default_messages_dir(),
            default_locale: default_default_locale(),
        }
    }
}

impl MessagesConfig {
    /// Validates the message configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the directory path is empty or the
    /// default locale does not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("messages.dir must not be empty".to_string()));
        }
        Locale::parse(&self.default_locale).map_err(|_| {
            ConfigError::Invalid(format!(
                "messages.default_locale '{}' is not a valid locale tag",
                self.default_locale
            ))
        })?;
        Ok(())
    }

    /// Returns the parsed default locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the tag does not parse; call
    /// [`MessagesConfig::validate`] first to surface this at load time.
    pub fn default_locale(&self) -> Result<Locale, ConfigError> {
        Locale::parse(&self.default_locale).map_err(|_| {
            ConfigError::Invalid(format!(
                "messages.default_locale '{}' is not a valid locale tag",
                self.default_locale
            ))
        })
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default bind address helper for serde.
const fn default_bind_addr() -> SocketAddr {
    DEFAULT_BIND_ADDR
}

/// Default messages directory helper for serde.
fn default_messages_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MESSAGES_DIR)
}

/// Default locale helper for serde.
fn default_default_locale() -> String {
    DEFAULT_DEFAULT_LOCALE.to_string()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration or message files.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Invalid or incomplete message catalog data.
    #[error("invalid message catalog: {0}")]
    Catalog(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the CLI argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}
