//! Terminal device access.
//!
//! Color sequences go to the controlling terminal (`/dev/tty`) so they reach
//! it even when a prompt hook captures stdout.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Controlling terminal device.
pub const TTY_PATH: &str = "/dev/tty";

/// Writer for color sequences: the controlling terminal if there is one,
/// stdout otherwise.
#[must_use]
pub fn sequence_writer() -> Box<dyn Write> {
    writer_for(Path::new(TTY_PATH))
}

/// Writer for `device`, falling back to stdout when it cannot be opened.
///
/// # Arguments
///
/// * `device` - Terminal device to open for writing
///
/// # Returns
///
/// The opened device, or stdout if opening fails.
#[must_use]
pub fn writer_for(device: &Path) -> Box<dyn Write> {
    match OpenOptions::new().write(true).open(device) {
        Ok(tty) => Box::new(tty),
        Err(e) => {
            debug!("no {} ({e}), writing sequences to stdout", device.display());
            Box::new(io::stdout())
        }
    }
}
