// Tracing subscriber setup.
//
// Purpose
// - Give embedders and end to end tests one call to turn handler tracing into
//   formatted log output, filtered through RUST_LOG.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Safe to call more than once; only the
/// first call wins, which is what concurrently running tests need.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
