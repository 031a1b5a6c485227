//! Structured logging for the Strata terrain generator.
//!
//! Provides structured, filterable logging via the `tracing` ecosystem.
//! Supports console output with timestamps and module paths, plus JSON file
//! logging in debug builds for post-mortem analysis. Integrates with the
//! configuration system to allow runtime log level control.

use std::path::Path;

use strata_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for the terrain generator.
///
/// Sets up structured logging with:
/// - Console output with timestamps, module paths, and severity levels
/// - JSON file logging in debug builds (optional)
/// - Environment-based filtering (respects RUST_LOG)
/// - Integration with the config system's log_level setting
///
/// # Arguments
///
/// * `log_dir` - Optional directory for JSON log files (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration to use for log level override
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    // Determine the filter string.
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    // Base filter: info by default, overridable via RUST_LOG env var.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    // Console layer: human-readable format with timestamps.
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // In debug builds, also log to a file for post-mortem analysis.
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("strata.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string.
///
/// Useful for testing and for getting consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}
