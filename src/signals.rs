//! Colors derived from live session context.
//!
//! Each provider is computed fresh per call. The inputs that come from the
//! outside world (branch, clock, exit status) are gathered behind
//! [`SessionContext`] so the resolver can be driven by a fake in tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Timelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::color::RGB;

/// Branch name used when no branch can be determined.
pub const FALLBACK_BRANCH: &str = "main";

/// Morning, `[6, 12)`.
pub const MORNING: &str = "#FFFAE3";
/// Afternoon, `[12, 18)`.
pub const AFTERNOON: &str = "#D1F0FF";
/// Evening, `[18, 21)`.
pub const EVENING: &str = "#FFD1DC";
/// Night, everything else.
pub const NIGHT: &str = "#1E1E2E";

/// Last command succeeded.
pub const STATUS_OK: &str = "#00FF00";
/// Last command failed.
pub const STATUS_FAILED: &str = "#FF0000";

/// Exact-match project folder colors.
const PROJECT_COLORS: &[(&str, &str)] = &[
    ("frontend", "#E3F2FD"),
    ("backend", "#E8F5E9"),
    ("infra", "#FFF3E0"),
    ("docs", "#F3E5F5"),
    ("api", "#E0F7FA"),
];

/// Upper bound (exclusive) of the pastel base value.
const RANDOM_BASE_MAX: i16 = 150;
/// Per-channel perturbation range, `[-25, 25)`.
const RANDOM_SPREAD: i16 = 25;

/// Everything the dynamic providers read from the running session.
pub trait SessionContext {
    /// Directory the shell is in.
    fn current_dir(&self) -> &Path;

    /// Active version-control branch, if any.
    fn branch(&self) -> Option<String>;

    /// Local wall-clock hour, 0-23.
    fn hour(&self) -> u32;

    /// Exit code of the last completed command.
    fn last_status(&self) -> i32;
}

/// Session context backed by git, the local clock and the shell-reported
/// exit status.
#[derive(Debug, Clone)]
pub struct LiveContext {
    cwd: PathBuf,
    status: i32,
}

impl LiveContext {
    /// Build a context for `cwd` with the given last exit status.
    #[must_use]
    pub fn new(cwd: PathBuf, status: i32) -> Self {
        Self { cwd, status }
    }
}

impl SessionContext for LiveContext {
    fn current_dir(&self) -> &Path {
        &self.cwd
    }

    fn branch(&self) -> Option<String> {
        git_branch(&self.cwd)
    }

    fn hour(&self) -> u32 {
        chrono::Local::now().hour()
    }

    fn last_status(&self) -> i32 {
        self.status
    }
}

/// Ask git for the current branch of the repository containing `dir`.
///
/// Returns `None` outside a repository, on detached HEAD, or when git
/// cannot be run.
#[must_use]
pub fn git_branch(dir: &Path) -> Option<String> {
    let output = match Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(dir)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            debug!("failed to run git: {e}");
            return None;
        }
    };

    if !output.status.success() {
        debug!(
            "git rev-parse failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() || branch == "HEAD" {
        return None;
    }
    Some(branch)
}

/// Deterministic color for a branch name.
///
/// An empty name is treated as [`FALLBACK_BRANCH`]. The CRC-32 of the name is
/// reduced modulo `0xFFFFFF` and formatted as lowercase hex.
#[must_use]
pub fn branch_color(branch: &str) -> String {
    let branch = if branch.is_empty() {
        FALLBACK_BRANCH
    } else {
        branch
    };
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(branch.as_bytes());
    let checksum = hasher.finalize();
    format!("#{:06x}", checksum % 0x00FF_FFFF)
}

/// Color for a local hour, 0-23.
#[must_use]
pub fn time_color(hour: u32) -> &'static str {
    match hour {
        6..=11 => MORNING,
        12..=17 => AFTERNOON,
        18..=20 => EVENING,
        _ => NIGHT,
    }
}

/// Color for a project folder name, or `default` when it is not listed.
#[must_use]
pub fn project_color<'a>(dir_name: &str, default: &'a str) -> &'a str {
    PROJECT_COLORS
        .iter()
        .find(|(name, _)| *name == dir_name)
        .map_or(default, |&(_, color)| color)
}

/// Color for the last command's exit code.
#[must_use]
pub fn status_color(code: i32) -> &'static str {
    if code == 0 { STATUS_OK } else { STATUS_FAILED }
}

/// Build a pastel color from a base value and per-channel offsets.
///
/// Each channel is `base + offset`, clamped to `0..=255`.
#[must_use]
pub fn pastel(base: i16, offsets: [i16; 3]) -> String {
    let channel = |offset: i16| u8::try_from((base + offset).clamp(0, 255)).unwrap_or(u8::MAX);
    RGB::new(channel(offsets[0]), channel(offsets[1]), channel(offsets[2])).to_hex()
}

/// Random low-saturation color from a freshly OS-seeded generator.
#[must_use]
pub fn random_color() -> String {
    let mut rng = StdRng::from_entropy();
    random_color_with(&mut rng)
}

/// Random low-saturation color drawn from `rng`.
#[must_use]
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = rng.gen_range(0..RANDOM_BASE_MAX);
    let offsets = [
        rng.gen_range(-RANDOM_SPREAD..RANDOM_SPREAD),
        rng.gen_range(-RANDOM_SPREAD..RANDOM_SPREAD),
        rng.gen_range(-RANDOM_SPREAD..RANDOM_SPREAD),
    ];
    pastel(base, offsets)
}

/// Last color handed out by `@cycle`, kept for the life of the process.
#[derive(Debug, Default, Clone)]
pub struct CycleState {
    last: Option<String>,
}

impl CycleState {
    /// Fresh state with no previous color.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last emitted color, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Next cycle color using [`random_color`].
    pub fn tick(&mut self) -> String {
        self.next_with(random_color)
    }

    /// Next cycle color using `generate`.
    ///
    /// A repeat of the previous color is retried once; if the retry repeats
    /// too, it is returned anyway.
    pub fn next_with<F: FnMut() -> String>(&mut self, mut generate: F) -> String {
        let mut color = generate();
        if self.last.as_deref() == Some(color.as_str()) {
            debug!("cycle repeated {color}, retrying once");
            color = generate();
        }
        self.last = Some(color.clone());
        color
    }
}
