//! Shell hook snippets for `dirtint init`.
//!
//! The hooks trigger a refresh on directory change and before each prompt,
//! passing the last exit status. zsh additionally gets a periodic tick so
//! `@time` catches up in idle shells.

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};

/// Shells with an init snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// GNU Bash
    Bash,
    /// Z shell
    Zsh,
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            other => Err(anyhow!("unsupported shell `{other}`: expected bash or zsh")),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shell::Bash => f.write_str("bash"),
            Shell::Zsh => f.write_str("zsh"),
        }
    }
}

/// Hook snippet for `shell`.
///
/// zsh also ticks every `interval_secs` seconds through its `periodic` hook.
#[must_use]
pub fn init_script(shell: Shell, interval_secs: u64) -> String {
    match shell {
        Shell::Zsh => format!(
            r#"# dirtint
_dirtint_refresh() {{ command dirtint refresh --status "${{1:-0}}"; }}
_dirtint_precmd() {{ _dirtint_refresh $?; }}
_dirtint_chpwd() {{ _dirtint_refresh 0; }}
_dirtint_periodic() {{ _dirtint_refresh 0; }}
autoload -Uz add-zsh-hook
add-zsh-hook precmd _dirtint_precmd
add-zsh-hook chpwd _dirtint_chpwd
add-zsh-hook periodic _dirtint_periodic
PERIOD={interval_secs}
"#
        ),
        // bash has no periodic hook; the prompt hook covers directory
        // changes and exit status
        Shell::Bash => r#"# dirtint
_dirtint_prompt() {
  local status=$?
  command dirtint refresh --status "$status"
  return $status
}
PROMPT_COMMAND="_dirtint_prompt${PROMPT_COMMAND:+;$PROMPT_COMMAND}"
"#
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert_eq!("zsh".parse::<Shell>().ok(), Some(Shell::Zsh));
        assert_eq!(" BASH ".parse::<Shell>().ok(), Some(Shell::Bash));
        assert!("fish".parse::<Shell>().is_err());
        assert_eq!(Shell::Zsh.to_string(), "zsh");
    }

    #[test]
    fn test_zsh_script() {
        let script = init_script(Shell::Zsh, 120);
        assert!(script.contains("add-zsh-hook chpwd _dirtint_chpwd"));
        assert!(script.contains("add-zsh-hook precmd _dirtint_precmd"));
        assert!(script.contains("PERIOD=120"));
    }

    #[test]
    fn test_bash_script() {
        let script = init_script(Shell::Bash, 30);
        assert!(script.contains("PROMPT_COMMAND="));
        assert!(script.contains("refresh --status \"$status\""));
    }
}
