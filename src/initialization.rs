//! Logger and resolver initialization.

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::LevelFilter;

use crate::config::DNS_TIMEOUT;
use crate::error_handling::InitializationError;

/// Initializes the logger with the given level.
///
/// Configures `env_logger` with colored level formatting. `RUST_LOG` is
/// read first for per-module filtering, then the explicit level takes
/// precedence for this crate (the `VERBOSE` environment variable maps to
/// debug).
///
/// # Errors
///
/// Returns `InitializationError::Logger` if a logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // hickory logs malformed-response warnings it recovers from itself
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Error);
    builder.filter_module("zone_verify", level);

    builder.format(|buf, record| {
        let level = record.level();
        let colored_level = match level {
            log::Level::Error => level.to_string().red(),
            log::Level::Warn => level.to_string().yellow(),
            log::Level::Info => level.to_string().green(),
            log::Level::Debug => level.to_string().blue(),
            log::Level::Trace => level.to_string().purple(),
        };
        writeln!(buf, "[{}] {}", colored_level, record.args())
    });

    // try_init() so tests can call this more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Initializes the DNS resolver all queries go through.
///
/// Reads the system resolver configuration, since the audit should see
/// the zone the way local clients do, and falls back to the default
/// upstream configuration when no system configuration is available.
/// Timeouts are explicit so a slow or unresponsive server fails a check
/// instead of hanging the run. `ndots` is zero: every query name is fully
/// qualified, so search-domain appending must never kick in.
///
/// # Errors
///
/// Returns `InitializationError::Resolver` if construction fails.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let config = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, _opts)) => config,
        Err(e) => {
            log::warn!("failed to read system resolver configuration, using default: {e}");
            ResolverConfig::default()
        }
    };

    let mut opts = ResolverOpts::default();
    opts.timeout = DNS_TIMEOUT;
    opts.attempts = 2;
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
