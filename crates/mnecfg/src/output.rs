//! Output helpers for the `mnecfg` CLI.

use std::env;
use std::io::{self, Write};

use crossterm::tty::IsTty;
use mne_config::{ConfigWarning, WarningSink};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Prefix color for warnings (#ffb454).
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54);

/// Print a value as pretty JSON to stdout.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Whether stderr should be colored.
///
/// `NO_COLOR`, `CLICOLOR=0` and `TERM=dumb` disable color; `CLICOLOR_FORCE`
/// forces it; otherwise color is used only when stderr is a terminal.
fn stderr_supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }
    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }
    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }
    io::stderr().is_tty()
}

fn warning_prefix(color: bool) -> String {
    if color {
        "warning:".truecolor(WARN.0, WARN.1, WARN.2).bold().to_string()
    } else {
        "warning:".to_string()
    }
}

/// Prints store warnings to stderr unless quiet.
#[derive(Debug, Clone, Copy)]
pub struct StderrSink {
    quiet: bool,
}

impl StderrSink {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl WarningSink for StderrSink {
    fn warn(&self, warning: &ConfigWarning) {
        if self.quiet {
            return;
        }
        eprintln!("{} {}", warning_prefix(stderr_supports_color()), warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prefix_has_no_escapes() {
        assert_eq!(warning_prefix(false), "warning:");
        let colored = warning_prefix(true);
        assert!(colored.contains("warning:"));
        assert!(colored.starts_with('\u{1b}'));
    }
}
