//! Logging Infrastructure
//!
//! Stdout logging plus an optional daily-rolling log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when neither `RUST_LOG` nor a configured level is set
fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,storefront_client=debug"
    } else {
        "warn"
    }
}

/// Build the filter: `RUST_LOG` first, then `level`, then the build default
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return from_env;
    }
    level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter()))
}

/// Initialize the logger
///
/// When `log_dir` exists, a second layer writes to `storefront.log.<date>`
/// there; keep the returned guard alive so buffered lines get flushed.
/// Calling this twice is harmless: the second call leaves the first
/// subscriber in place.
pub fn init_logger(level: Option<&str>, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stdout);

    let (file_layer, guard) = match log_dir.map(Path::new).filter(|p| p.is_dir()) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "storefront.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    if let Err(e) = result {
        tracing::debug!("logger already initialized: {}", e);
    }
    guard
}
