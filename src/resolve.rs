//! Directive resolution: turn the stored directive into concrete colors.

use tracing::debug;

use crate::color::{lookup, normalize};
use crate::config::Config;
use crate::directive::{self, Mode};
use crate::palette;
use crate::signals::{self, CycleState, SessionContext};

/// Outcome of resolving a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A single background; the foreground is derived by contrast.
    Color(String),
    /// A theme's background and foreground, applied as given.
    Theme {
        /// Background color
        background: String,
        /// Foreground color
        foreground: String,
    },
    /// The directive named no known color. Holds the directive as read.
    Invalid(String),
}

/// Resolves directives against a session, holding the `@cycle` state.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: Config,
    cycle: CycleState,
}

impl Resolver {
    /// Create a resolver with empty cycle state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cycle: CycleState::new(),
        }
    }

    /// Settings this resolver was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Last color produced by `@cycle` in this process.
    #[must_use]
    pub fn last_cycle_color(&self) -> Option<&str> {
        self.cycle.last()
    }

    /// Resolve the nearest directive above the session's directory.
    ///
    /// The nearest existing file always wins, so a blank one resolves to
    /// [`Resolved::Invalid`] instead of deferring to an ancestor. When there is
    /// no file, or the nearest one cannot be read, the configured default is
    /// resolved in its place. The default goes through the same dispatch as a
    /// stored directive, so it may name a theme or an `@mode` as well as a
    /// color.
    pub fn resolve(&mut self, ctx: &impl SessionContext) -> Resolved {
        let directive = directive::find_nearest(ctx.current_dir())
            .and_then(|found| found.value)
            .unwrap_or_else(|| self.config.default_color.clone());
        self.resolve_directive(&directive, ctx)
    }

    /// Resolve a directive string.
    ///
    /// Dynamic tokens are checked first, then theme names, then colors.
    pub fn resolve_directive(&mut self, directive: &str, ctx: &impl SessionContext) -> Resolved {
        let normalized = normalize(directive);

        if let Some(mode) = Mode::from_token(&normalized) {
            let color = self.dynamic(mode, ctx);
            debug!("{} -> {color}", mode.token());
            return Resolved::Color(color);
        }

        if let Some(theme) = palette::lookup_theme(&normalized) {
            debug!("theme {} -> {}/{}", theme.name, theme.background, theme.foreground);
            return Resolved::Theme {
                background: theme.background.to_string(),
                foreground: theme.foreground.to_string(),
            };
        }

        match lookup(directive) {
            Some(color) => Resolved::Color(color),
            None => {
                debug!("directive {directive:?} is not a known color");
                Resolved::Invalid(directive.to_string())
            }
        }
    }

    fn dynamic(&mut self, mode: Mode, ctx: &impl SessionContext) -> String {
        match mode {
            Mode::Git => {
                let branch = ctx
                    .branch()
                    .unwrap_or_else(|| signals::FALLBACK_BRANCH.to_string());
                signals::branch_color(&branch)
            }
            Mode::Time => signals::time_color(ctx.hour()).to_string(),
            Mode::Project => {
                let name = ctx
                    .current_dir()
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let default = &self.config.default_color;
                let fallback = lookup(default).unwrap_or_else(|| default.clone());
                signals::project_color(&name, &fallback).to_string()
            }
            Mode::Cycle => self.cycle.tick(),
            Mode::Status => signals::status_color(ctx.last_status()).to_string(),
        }
    }
}
