//! Process-wide logging setup shared by the simulator binaries.

pub mod subscriber;

pub use subscriber::DEFAULT_FILTER;

/// Install the JSON tracing subscriber.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    subscriber::init(DEFAULT_FILTER);
}
