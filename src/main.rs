//! `dirtint` command-line entry point.
//!
//! # Usage
//!
//! - `dirtint set <value>`: store a directive for the current directory
//! - `dirtint preview <value>`: apply a directive without storing it
//! - `dirtint unset`: remove the current directory's directive
//! - `dirtint refresh`: apply the nearest directive
//! - `dirtint init <shell>`: print shell hooks
//!
//! # Environment Variables
//!
//! - `DIRTINT_DEFAULT_COLOR`: fallback color or directive (default `#1E1E2E`)
//! - `DIRTINT_DEBUG`: print diagnostics to stderr
//! - `DIRTINT_INTERVAL`: seconds between periodic refreshes (default 300)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use dirtint::config::Config;
use dirtint::directive::{self, DIRECTIVE_FILE, Mode};
use dirtint::resolve::Resolver;
use dirtint::shell::{self, Shell};
use dirtint::signals::LiveContext;
use dirtint::{logs, osc, palette, terminal};

/// Per-directory terminal background colors.
#[derive(Debug, Parser)]
#[command(name = "dirtint", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Store a color, theme or @mode for the current directory and apply it.
    Set {
        /// Color name, #RRGGBB, theme name, or one of @git @time @project @cycle @status.
        value: String,
    },
    /// Apply a color, theme or @mode without storing it.
    Preview {
        /// Same forms as `set`.
        value: String,
        /// Exit code of the last command, for @status.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        status: i32,
    },
    /// Remove the current directory's directive and re-apply.
    Unset,
    /// Apply the nearest directive.
    Refresh {
        /// Exit code of the last command, for @status.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        status: i32,
    },
    /// Restore the terminal's own colors.
    Reset,
    /// List color names, themes and modes.
    List,
    /// Re-apply the nearest directive every DIRTINT_INTERVAL seconds.
    Watch {
        /// Exit code to report for @status.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        status: i32,
    },
    /// Print shell hooks that refresh on directory change and prompt.
    Init {
        /// bash or zsh
        shell: Shell,
    },
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("Failed to determine current directory")
}

fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    let interval = Duration::from_secs(config.interval_secs);
    let mut resolver = Resolver::new(config);

    match cli.command {
        Command::Set { value } => {
            let cwd = current_dir()?;
            let path = directive::write(&cwd, &value)?;
            println!("{} -> {}", path.display(), value.trim());
            dirtint::refresh(
                &mut resolver,
                &LiveContext::new(cwd, 0),
                terminal::sequence_writer(),
            )?;
        }
        Command::Preview { value, status } => {
            let ctx = LiveContext::new(current_dir()?, status);
            let out = terminal::sequence_writer();
            let applied = dirtint::preview(&mut resolver, &value, &ctx, out)?;
            if applied.is_empty() {
                warn!("nothing applied for {value:?}");
            }
        }
        Command::Unset => {
            let cwd = current_dir()?;
            if directive::remove(&cwd)? {
                println!("removed {}", cwd.join(DIRECTIVE_FILE).display());
            } else {
                println!("nothing to unset in {}", cwd.display());
            }
            dirtint::refresh(
                &mut resolver,
                &LiveContext::new(cwd, 0),
                terminal::sequence_writer(),
            )?;
        }
        Command::Refresh { status } => {
            let ctx = LiveContext::new(current_dir()?, status);
            dirtint::refresh(&mut resolver, &ctx, terminal::sequence_writer())?;
        }
        Command::Reset => {
            let mut out = terminal::sequence_writer();
            out.write_all(osc::RESET_BACKGROUND.as_bytes())
                .and_then(|()| out.write_all(osc::RESET_FOREGROUND.as_bytes()))
                .and_then(|()| out.flush())
                .context("Failed to write reset sequence")?;
        }
        Command::List => print_list(&mut io::stdout().lock())?,
        Command::Watch { status } => {
            let ctx = LiveContext::new(current_dir()?, status);
            let mut out = terminal::sequence_writer();
            loop {
                dirtint::refresh(&mut resolver, &ctx, &mut out)?;
                thread::sleep(interval);
            }
        }
        Command::Init { shell } => {
            print!("{}", shell::init_script(shell, resolver.config().interval_secs));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_list(out: &mut impl Write) -> Result<()> {
    writeln!(out, "colors:")?;
    for (name, value) in palette::color_names() {
        writeln!(out, "  {name:<16} {value}")?;
    }
    writeln!(out, "themes:")?;
    for theme in palette::themes() {
        writeln!(
            out,
            "  {:<16} {} on {}",
            theme.name, theme.foreground, theme.background
        )?;
    }
    writeln!(out, "modes:")?;
    for mode in Mode::ALL {
        writeln!(out, "  {}", mode.token())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            logs::init(false);
            eprintln!("dirtint: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    logs::init(config.debug);
    debug!("config={config:?}");

    match run(cli, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("dirtint: {e:#}");
            ExitCode::FAILURE
        }
    }
}
