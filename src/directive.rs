//! Directive files: the per-directory instruction that picks a color.
//!
//! A directive is a single line stored in [`DIRECTIVE_FILE`] inside the
//! directory it governs. Lookups walk from the current directory up to the
//! filesystem root and the nearest file wins.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the file holding a directory's directive.
pub const DIRECTIVE_FILE: &str = ".dirtint";

/// Dynamic directive tokens, computed from live context on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `@git`: hash of the current branch name
    Git,
    /// `@time`: time-of-day palette
    Time,
    /// `@project`: project folder table
    Project,
    /// `@cycle`: random pastel, avoiding an immediate repeat
    Cycle,
    /// `@status`: green or red by last exit code
    Status,
}

impl Mode {
    /// All modes, in documentation order.
    pub const ALL: [Mode; 5] = [
        Mode::Git,
        Mode::Time,
        Mode::Project,
        Mode::Cycle,
        Mode::Status,
    ];

    /// Parse a normalized token such as `@git`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.token() == token)
    }

    /// Directive token for this mode.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Mode::Git => "@git",
            Mode::Time => "@time",
            Mode::Project => "@project",
            Mode::Cycle => "@cycle",
            Mode::Status => "@status",
        }
    }
}

/// A directive file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    /// File the directive was read from
    pub path: PathBuf,
    /// Trimmed first line, possibly empty; `None` if the file could not be read
    pub value: Option<String>,
}

/// Read the trimmed first line of a directive file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled file still yields a (probably invalid) directive.
///
/// # Arguments
///
/// * `path` - Directive file to read
///
/// # Returns
///
/// - `Ok(Some(line))` when the file exists; `line` may be empty
/// - `Ok(None)` when the file is missing
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_first_line(path: &Path) -> Result<Option<String>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {}", path.display()));
        }
    };

    let mut line = Vec::new();
    BufReader::new(file)
        .read_until(b'\n', &mut line)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Find the nearest directive file, starting at `start` and walking up to the
/// root.
///
/// The walk stops at the first file that exists. A file that exists but
/// cannot be read is logged and returned with no value.
///
/// # Arguments
///
/// * `start` - Directory to start from, usually the shell's working directory
///
/// # Returns
///
/// - `Some(found)` for the nearest existing directive file
/// - `None` if no directory up to the root has one
#[must_use]
pub fn find_nearest(start: &Path) -> Option<Found> {
    for dir in start.ancestors() {
        let path = dir.join(DIRECTIVE_FILE);
        match read_first_line(&path) {
            Ok(Some(value)) => {
                debug!("directive {value:?} from {}", path.display());
                return Some(Found {
                    path,
                    value: Some(value),
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!("unreadable directive: {e:#}");
                return Some(Found { path, value: None });
            }
        }
    }
    debug!("no directive above {}", start.display());
    None
}

/// Write `value` as the directive for `dir`, replacing any existing one.
///
/// # Errors
///
/// Returns an error if `value` is blank or the file cannot be written.
pub fn write(dir: &Path, value: &str) -> Result<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        bail!("Refusing to write an empty directive");
    }
    if value.contains(['\n', '\r']) {
        bail!("Directive must be a single line");
    }

    let path = dir.join(DIRECTIVE_FILE);
    fs::write(&path, format!("{value}\n"))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("wrote directive {value:?} to {}", path.display());
    Ok(path)
}

/// Remove the directive for `dir`.
///
/// # Returns
///
/// - `Ok(true)` if a file was removed
/// - `Ok(false)` if there was nothing to remove
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn remove(dir: &Path) -> Result<bool> {
    let path = dir.join(DIRECTIVE_FILE);
    match fs::remove_file(&path) {
        Ok(()) => {
            debug!("removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}
