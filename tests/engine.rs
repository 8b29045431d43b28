//! End-to-end resolution against real directory trees.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use dirtint::config::Config;
use dirtint::directive::{self, DIRECTIVE_FILE};
use dirtint::resolve::{Resolved, Resolver};
use dirtint::signals::SessionContext;

struct Session {
    cwd: PathBuf,
    status: i32,
}

impl SessionContext for Session {
    fn current_dir(&self) -> &Path {
        &self.cwd
    }

    fn branch(&self) -> Option<String> {
        Some("main".to_string())
    }

    fn hour(&self) -> u32 {
        13
    }

    fn last_status(&self) -> i32 {
        self.status
    }
}

#[test]
fn nearest_directive_wins() -> Result<()> {
    let tmp = TempDir::new()?;
    let a = tmp.path().join("a");
    let b = a.join("b");
    let c = b.join("c");
    fs::create_dir_all(&c)?;
    fs::write(a.join(DIRECTIVE_FILE), "dracula\n")?;
    fs::write(b.join(DIRECTIVE_FILE), "  Light Blue  \nred\n")?;

    let mut resolver = Resolver::new(Config::default());
    let session = Session { cwd: c, status: 0 };
    assert_eq!(
        resolver.resolve(&session),
        Resolved::Color("#ADD8E6".to_string())
    );
    Ok(())
}

#[test]
fn status_directive_end_to_end() -> Result<()> {
    let tmp = TempDir::new()?;
    directive::write(tmp.path(), "@status")?;

    let mut resolver = Resolver::new(Config::default());
    let mut out = Vec::new();
    let session = Session {
        cwd: tmp.path().to_path_buf(),
        status: 0,
    };
    let applied = dirtint::refresh(&mut resolver, &session, &mut out)?;

    // 255 * 587 = 149685 is under the threshold, so green gets white text
    assert_eq!(applied.background.as_deref(), Some("#00FF00"));
    assert_eq!(applied.foreground.as_deref(), Some("#FFFFFF"));
    assert_eq!(out, b"\x1b]11;#00FF00\x07\x1b]10;#FFFFFF\x07");

    let failed = Session {
        cwd: tmp.path().to_path_buf(),
        status: 127,
    };
    let applied = dirtint::refresh(&mut resolver, &failed, Vec::new())?;
    assert_eq!(applied.background.as_deref(), Some("#FF0000"));
    Ok(())
}

#[test]
fn unset_falls_back_to_ancestor_then_default() -> Result<()> {
    let tmp = TempDir::new()?;
    let inner = tmp.path().join("inner");
    fs::create_dir_all(&inner)?;
    directive::write(tmp.path(), "@time")?;
    directive::write(&inner, "nord")?;

    let config = Config {
        default_color: "lightyellow".to_string(),
        ..Config::default()
    };
    let mut resolver = Resolver::new(config);
    let session = Session {
        cwd: inner.clone(),
        status: 0,
    };

    assert!(matches!(resolver.resolve(&session), Resolved::Theme { .. }));

    assert!(directive::remove(&inner)?);
    assert_eq!(
        resolver.resolve(&session),
        Resolved::Color("#D1F0FF".to_string())
    );

    assert!(directive::remove(tmp.path())?);
    let applied = dirtint::refresh(&mut resolver, &session, Vec::new())?;
    assert_eq!(applied.background.as_deref(), Some("#FFFFE0"));
    assert_eq!(applied.foreground.as_deref(), Some("#000000"));
    Ok(())
}

#[test]
fn invalid_directive_falls_back_to_default() -> Result<()> {
    let tmp = TempDir::new()?;
    directive::write(tmp.path(), "not a color")?;

    let mut resolver = Resolver::new(Config::default());
    let session = Session {
        cwd: tmp.path().to_path_buf(),
        status: 0,
    };
    assert_eq!(
        resolver.resolve(&session),
        Resolved::Invalid("not a color".to_string())
    );

    let applied = dirtint::refresh(&mut resolver, &session, Vec::new())?;
    assert_eq!(applied.background.as_deref(), Some("#1E1E2E"));
    assert_eq!(applied.foreground.as_deref(), Some("#FFFFFF"));
    Ok(())
}

#[test]
fn preview_does_not_touch_disk() -> Result<()> {
    let tmp = TempDir::new()?;
    let mut resolver = Resolver::new(Config::default());
    let session = Session {
        cwd: tmp.path().to_path_buf(),
        status: 0,
    };

    let applied = dirtint::preview(&mut resolver, "@git", &session, Vec::new())?;
    assert_eq!(applied.background.as_deref(), Some("#28ce23"));
    assert!(!tmp.path().join(DIRECTIVE_FILE).exists());
    Ok(())
}

#[test]
fn blank_nearest_directive_uses_default_not_ancestor() -> Result<()> {
    let tmp = TempDir::new()?;
    let inner = tmp.path().join("inner");
    fs::create_dir_all(&inner)?;
    directive::write(tmp.path(), "red")?;
    fs::write(inner.join(DIRECTIVE_FILE), "\n")?;

    let mut resolver = Resolver::new(Config::default());
    let session = Session {
        cwd: inner,
        status: 0,
    };
    assert_eq!(resolver.resolve(&session), Resolved::Invalid(String::new()));

    let applied = dirtint::refresh(&mut resolver, &session, Vec::new())?;
    assert_eq!(applied.background.as_deref(), Some("#1E1E2E"));
    assert_eq!(applied.foreground.as_deref(), Some("#FFFFFF"));
    Ok(())
}

#[test]
fn non_utf8_directive_uses_default_not_ancestor() -> Result<()> {
    let tmp = TempDir::new()?;
    let inner = tmp.path().join("inner");
    fs::create_dir_all(&inner)?;
    directive::write(tmp.path(), "red")?;
    fs::write(inner.join(DIRECTIVE_FILE), b"\xff\n")?;

    let mut resolver = Resolver::new(Config::default());
    let session = Session {
        cwd: inner,
        status: 0,
    };
    assert_eq!(
        resolver.resolve(&session),
        Resolved::Invalid("\u{FFFD}".to_string())
    );

    let mut out = Vec::new();
    let applied = dirtint::refresh(&mut resolver, &session, &mut out)?;
    assert_eq!(applied.background.as_deref(), Some("#1E1E2E"));
    assert_eq!(out, b"\x1b]11;#1E1E2E\x07\x1b]10;#FFFFFF\x07");
    Ok(())
}
