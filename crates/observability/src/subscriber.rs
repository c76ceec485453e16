//! JSON tracing subscriber writing to stderr.
//!
//! Stdout is left to the program's own output (summaries, exports), so logs
//! never interleave with data a caller may pipe elsewhere.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a JSON formatter filtered by `RUST_LOG`, falling back to
/// `default_filter`. Returns `false` if a global subscriber already existed.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
