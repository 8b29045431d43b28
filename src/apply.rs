//! Emitting resolved colors as terminal sequences.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, warn};

use crate::color::{contrast_for, is_hex_color, lookup};
use crate::config::Config;
use crate::osc;
use crate::resolve::Resolved;

/// Colors actually written to the terminal by one [`Applicator::apply`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Applied {
    /// Background sent, if any
    pub background: Option<String>,
    /// Foreground sent, if any
    pub foreground: Option<String>,
}

impl Applied {
    /// Whether nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.foreground.is_none()
    }
}

/// Writes background/foreground sequences for resolved colors.
pub struct Applicator<'a, W: Write> {
    out: W,
    config: &'a Config,
}

impl<'a, W: Write> Applicator<'a, W> {
    /// Create an applicator writing to `out`.
    pub fn new(out: W, config: &'a Config) -> Self {
        Self { out, config }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Apply a resolved color.
    ///
    /// Themes are applied component by component, skipping malformed ones.
    /// A single color gets a contrast foreground. An invalid color falls back
    /// once to the configured default; if that is invalid too, nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn apply(&mut self, resolved: &Resolved) -> Result<Applied> {
        match resolved {
            Resolved::Theme {
                background,
                foreground,
            } => self.apply_theme(background, foreground),
            Resolved::Color(color) if is_hex_color(color) => self.apply_color(color),
            Resolved::Color(input) | Resolved::Invalid(input) => self.apply_fallback(input),
        }
    }

    fn apply_theme(&mut self, background: &str, foreground: &str) -> Result<Applied> {
        let mut applied = Applied::default();
        if is_hex_color(background) {
            self.emit(&osc::set_background(background))?;
            applied.background = Some(background.to_string());
        } else {
            warn!("theme background {background:?} is not a hex color, skipping");
        }
        if is_hex_color(foreground) {
            self.emit(&osc::set_foreground(foreground))?;
            applied.foreground = Some(foreground.to_string());
        } else {
            warn!("theme foreground {foreground:?} is not a hex color, skipping");
        }
        Ok(applied)
    }

    fn apply_color(&mut self, background: &str) -> Result<Applied> {
        let foreground = contrast_for(background);
        self.emit(&osc::set_background(background))?;
        self.emit(&osc::set_foreground(foreground))?;
        debug!("applied {background} with {foreground} text");
        Ok(Applied {
            background: Some(background.to_string()),
            foreground: Some(foreground.to_string()),
        })
    }

    fn apply_fallback(&mut self, input: &str) -> Result<Applied> {
        let config = self.config;
        let default = &config.default_color;
        if config.debug {
            warn!("invalid color {input:?}, falling back to {default:?}");
        }

        match lookup(default).filter(|color| is_hex_color(color)) {
            Some(color) => self.apply_color(&color),
            None => {
                if config.debug {
                    warn!("default color {default:?} is invalid too, leaving terminal as is");
                }
                Ok(Applied::default())
            }
        }
    }

    fn emit(&mut self, sequence: &str) -> Result<()> {
        self.out
            .write_all(sequence.as_bytes())
            .and_then(|()| self.out.flush())
            .context("Failed to write color sequence")
    }
}
