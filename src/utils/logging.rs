//! Logging helpers
//!
//! Subscriber setup plus the banner-style milestones of a batch run

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global fmt subscriber
///
/// `RUST_LOG` takes precedence. Calling it twice is harmless.
///
/// # Arguments
/// - `verbose`: default to `debug` instead of `info` when `RUST_LOG` is unset
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Log the effective configuration at startup
///
/// # Arguments
/// - `config`: the configuration the run will use
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("flight analytics run");
    info!("input: {}", config.input_path);
    if config.flight_limit > 0 {
        info!("limit: {} flights", config.flight_limit);
    }
    info!(
        "airlines: {}",
        config
            .airline_table_path
            .as_deref()
            .unwrap_or("built-in sample directory")
    );
    info!(
        "missed landing threshold: {} min",
        config.missed_landing_threshold_minutes
    );
    info!("{}", "=".repeat(60));
}

/// Log the outcome of the read phase
///
/// # Arguments
/// - `count`: number of flights read
/// - `path`: input file they were read from
pub fn log_flights_loaded(count: usize, path: &str) {
    info!("{}", "─".repeat(60));
    info!("loaded {} flights from {}", count, path);
    info!("{}", "─".repeat(60));
}
