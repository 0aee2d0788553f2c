//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use create_three_core::domain::ColorTag;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is dropped when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || config.output.no_color || !io::stdout().is_terminal();
        Self::with_settings(args.quiet, no_color)
    }

    pub fn with_settings(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Paint `text` with a registry colour tag, unless colour is off.
    pub fn paint(&self, text: &str, color: ColorTag) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            paint(text, color)
        }
    }

    /// Spinner shown while files are written; hidden in quiet mode and when
    /// stderr is not a terminal.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet || !io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_owned());
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

/// Map a registry colour tag onto a terminal colour.
pub fn paint(text: &str, color: ColorTag) -> String {
    match color {
        ColorTag::Yellow => text.yellow().to_string(),
        ColorTag::Blue => text.blue().to_string(),
        ColorTag::Cyan => text.cyan().to_string(),
        ColorTag::Green => text.green().to_string(),
        ColorTag::Magenta => text.magenta().to_string(),
        ColorTag::Red => text.red().to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_suppresses_print() {
        let out = OutputManager::with_settings(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(OutputManager::with_settings(false, false).supports_color());
        assert!(!OutputManager::with_settings(false, true).supports_color());
    }

    #[test]
    fn paint_respects_no_color() {
        let out = OutputManager::with_settings(false, true);
        assert_eq!(out.paint("Vanilla", ColorTag::Yellow), "Vanilla");
    }

    #[test]
    fn paint_wraps_in_ansi() {
        let painted = paint("React", ColorTag::Cyan);
        assert!(painted.contains("React"));
        assert!(painted.starts_with("\u{1b}["));
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        let out = OutputManager::with_settings(true, true);
        assert!(out.spinner("Writing").is_hidden());
    }
}
