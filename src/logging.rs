use std::env;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `warn`.
pub const LOG_ENV: &str = "SCRAMBLE_LOG";

fn build_filter(from_env: Option<String>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    from_env
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// the map path.
pub fn init(verbose: bool) {
    let filter = build_filter(env::var(LOG_ENV).ok(), verbose);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
