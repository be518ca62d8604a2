//! Tracing subscriber setup for the `mvigen` binary.
//!
//! The binary owns the subscriber; `mvigen-core` and `mvigen-adapters`
//! emit spans and events but never install anything. Verbosity flags map
//! to a per-crate filter covering all three workspace crates, and a set
//! `RUST_LOG` takes precedence over the flags entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(crate_filter(flag_level(args))),
    };

    let ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}

/// Level selected by `--quiet` / `-v` / `-vv` / `-vvv`; warnings by default.
fn flag_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

fn crate_filter(level: &str) -> String {
    format!("mvigen={level},mvigen_core={level},mvigen_adapters={level}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(flag_level(&args(0, false)), "warn");
    }

    #[test]
    fn verbosity_steps_up_and_saturates() {
        assert_eq!(flag_level(&args(1, false)), "info");
        assert_eq!(flag_level(&args(2, false)), "debug");
        assert_eq!(flag_level(&args(3, false)), "trace");
        assert_eq!(flag_level(&args(9, false)), "trace");
    }

    #[test]
    fn quiet_beats_any_verbosity() {
        assert_eq!(flag_level(&args(0, true)), "error");
        assert_eq!(flag_level(&args(3, true)), "error");
    }

    #[test]
    fn filter_covers_every_workspace_crate() {
        let filter = crate_filter("debug");
        assert!(filter.contains("mvigen=debug"));
        assert!(filter.contains("mvigen_core=debug"));
        assert!(filter.contains("mvigen_adapters=debug"));
    }
}
