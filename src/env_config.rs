//! Environment configuration shared by both binaries.
//!
//! Reads `DICE_STATS_SORT` (default sort selector) and `DICE_STATS_LOG`
//! (tracing filter, falling back to `RUST_LOG`).

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_SORT_METHOD, ENV_LOG, ENV_SORT};
use crate::sorting::SortMethod;

/// Precedence: `--sort` value, then `DICE_STATS_SORT`, then the default.
/// Raw strings pass through so an invalid or empty value still reaches the
/// report.
pub fn pick_sort_selector(cli: Option<&str>, env: Option<&str>) -> String {
    cli.or(env).unwrap_or(DEFAULT_SORT_METHOD).to_string()
}

/// Resolve the sort method from the `--sort` value and `DICE_STATS_SORT`.
pub fn resolve_sort(cli: Option<&str>) -> SortMethod {
    let env = std::env::var(ENV_SORT).ok();
    SortMethod::parse(&pick_sort_selector(cli, env.as_deref()))
}

/// Install a stderr `fmt` subscriber. Stdout stays reserved for the report.
/// Tolerates an already-installed global subscriber.
pub fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .ok()
        .and_then(|s| EnvFilter::try_new(s).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok(); // May fail if already initialized
}
