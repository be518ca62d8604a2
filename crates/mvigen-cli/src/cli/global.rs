//! Flags shared by every `mvigen` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so a user can write
//! `mvigen feature home -vv` or `mvigen -vv feature home` interchangeably.

use std::path::PathBuf;

use clap::Args;

/// Options accepted anywhere on the command line.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level once per occurrence.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (-v info, -vv debug, -vvv trace)",
        long_help = "Raise the log level. Without this flag only warnings and \
                     errors are shown; -v adds generation progress, -vv adds \
                     per-file diagnostics, -vvv traces everything."
    )]
    pub verbose: u8,

    /// Errors only; suppresses the generated-file listing.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain output without ANSI colour.
    ///
    /// The `NO_COLOR` environment variable has the same effect
    /// (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::BoolishValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How results are rendered.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format (auto, human, plain, json)"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured indicators for interactive use.
    Human,
    /// Same layout without ANSI codes.
    Plain,
    /// One JSON object per generation run, for scripting.
    Json,
}
