//! Terminal output for generation results and settings listings.
//!
//! One [`OutputManager`] is built at startup from the global flags and the
//! loaded config, then passed into every command handler. Errors never go
//! through it; `main::handle_error` writes those to stderr directly.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes status lines to stdout, honoring quiet mode and colour settings.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            // Either surface may turn colour off; the flag also arrives via
            // the NO_COLOR environment variable.
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unadorned line, e.g. a generated file path or a settings value.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓` line for a completed generation run.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            self.badge("\u{2713}", msg)
        } else {
            self.badge(
                &"\u{2713}".green().bold().to_string(),
                &msg.green().to_string(),
            )
        }
    }

    /// `⚠` line, e.g. a skipped repository or a missing settings path.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            self.badge("\u{26a0}", msg)
        } else {
            self.badge(
                &"\u{26a0}".yellow().bold().to_string(),
                &msg.yellow().to_string(),
            )
        }
    }

    /// `ℹ` line, e.g. the dry-run summary.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            self.badge("\u{2139}", msg)
        } else {
            self.badge(
                &"\u{2139}".blue().bold().to_string(),
                &msg.blue().to_string(),
            )
        }
    }

    /// Heading above a listing, e.g. the settings table.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_line(text)
        } else {
            self.term.write_line(&text.cyan().bold().to_string())
        }
    }

    /// The resolved (never `Auto`) output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn badge(&self, symbol: &str, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&format!("{symbol} {msg}"))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Plain, // sidestep TTY detection
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_swallows_every_line_kind() {
        let out = manager(true, true);
        assert!(out.print("x").is_ok());
        assert!(out.success("x").is_ok());
        assert!(out.warning("x").is_ok());
        assert!(out.header("x").is_ok());
    }

    #[test]
    fn flag_and_config_both_disable_color() {
        assert!(manager(false, true).no_color);
        assert!(!manager(false, false).no_color);

        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        assert!(OutputManager::new(&args, &cfg).no_color);
    }

    #[test]
    fn explicit_format_is_kept_as_given() {
        assert_eq!(manager(false, false).format(), OutputFormat::Plain);
    }
}
