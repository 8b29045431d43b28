//! Logging setup.
//!
//! Diagnostics go to stderr so they never mix with the color sequences or
//! command output on stdout.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used for this crate's events.
///
/// `debug` when the debug toggle is on, `warn` otherwise.
#[must_use]
pub fn level(debug: bool) -> Level {
    if debug { Level::DEBUG } else { Level::WARN }
}

/// Install the global stderr subscriber.
///
/// `RUST_LOG`, when set, replaces the filter derived from `debug`. Calling
/// this more than once is harmless.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("dirtint={}", level(debug).as_str().to_lowercase()))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level() {
        assert_eq!(level(true), Level::DEBUG);
        assert_eq!(level(false), Level::WARN);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
