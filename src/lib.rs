//! Context-driven terminal background colors.
//!
//! A directive stored per directory (a color, a theme or a dynamic token such
//! as `@git`) is resolved to concrete colors and sent to the terminal as
//! OSC 10/11 sequences.

pub mod apply;
pub mod color;
pub mod config;
pub mod directive;
pub mod logs;
pub mod osc;
pub mod palette;
pub mod resolve;
pub mod shell;
pub mod signals;
pub mod terminal;

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use apply::{Applicator, Applied};
use resolve::Resolver;
use signals::SessionContext;

/// Resolve the nearest directive for `ctx` and write it to `out`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn refresh<W: Write>(
    resolver: &mut Resolver,
    ctx: &impl SessionContext,
    out: W,
) -> Result<Applied> {
    let resolved = resolver.resolve(ctx);
    debug!("resolved={resolved:?}");
    Applicator::new(out, resolver.config()).apply(&resolved)
}

/// Resolve `directive` without persisting it and write it to `out`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn preview<W: Write>(
    resolver: &mut Resolver,
    directive: &str,
    ctx: &impl SessionContext,
    out: W,
) -> Result<Applied> {
    let resolved = resolver.resolve_directive(directive, ctx);
    debug!("resolved={resolved:?}");
    Applicator::new(out, resolver.config()).apply(&resolved)
}
