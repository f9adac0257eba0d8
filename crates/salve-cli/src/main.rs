// crates/salve-cli/src/main.rs
// ============================================================================
// Module: Salve CLI Entry Point
// Description: Command dispatcher for serving and checking the service.
// Purpose: Load configuration, build the catalog, and run the HTTP server.
// Dependencies: clap, salve-config, salve-http, tokio
// ============================================================================

//! ## Overview
//! The Salve CLI wires configuration, the message catalog, and the HTTP
//! server together. `serve` runs the service; `check` validates the
//! configuration and message files and prints a per-locale coverage
//! summary without binding a socket.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use salve_config::SalveConfig;
use salve_config::coverage_report;
use salve_config::load_messages;
use salve_http::GreetingServer;
use salve_http::StderrAuditSink;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Localized greeting service.
#[derive(Debug, Parser)]
#[command(name = "salve", version, about = "Localized greeting HTTP service")]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve {
        /// Path to the configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate configuration and message files, then print coverage.
    Check {
        /// Path to the configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// CLI-level errors surfaced to the operator.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration or catalog loading failed.
    #[error("{0}")]
    Config(#[from] salve_config::ConfigError),
    /// The HTTP server failed to start or crashed.
    #[error("{0}")]
    Serve(#[from] salve_http::ServeError),
    /// The async runtime could not be built.
    #[error("runtime error: {0}")]
    Runtime(String),
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

#[allow(clippy::print_stderr, reason = "CLI reports failures on stderr.")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Serve {
            config,
        } => run_serve(config.as_deref()),
        Command::Check {
            config,
        } => run_check(config.as_deref()),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("salve: {err}");
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Loads everything and serves requests until the process is stopped.
#[allow(clippy::print_stderr, reason = "Startup notice goes to stderr.")]
fn run_serve(config_path: Option<&Path>) -> Result<(), CliError> {
    let config = SalveConfig::load(config_path)?;
    let loaded = load_messages(&config.messages)?;
    let server = GreetingServer::new(
        &config.server,
        Arc::new(loaded.catalog),
        loaded.errors,
        Arc::new(StderrAuditSink),
    );
    eprintln!("salve: listening on {}", config.server.bind_addr);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| CliError::Runtime(err.to_string()))?;
    runtime.block_on(server.serve())?;
    Ok(())
}

/// Validates configuration and prints per-locale greeting coverage.
#[allow(clippy::print_stdout, reason = "Coverage summary goes to stdout.")]
fn run_check(config_path: Option<&Path>) -> Result<(), CliError> {
    let config = SalveConfig::load(config_path)?;
    let loaded = load_messages(&config.messages)?;
    println!("config ok: {} locale(s) loaded", loaded.catalog.locale_tags().len());
    for coverage in coverage_report(&loaded.catalog) {
        if coverage.missing.is_empty() {
            println!("  {}: full coverage", coverage.tag);
        } else {
            println!(
                "  {}: {} of 5 keys, missing {}",
                coverage.tag,
                coverage.present,
                coverage.missing.join(", ")
            );
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
