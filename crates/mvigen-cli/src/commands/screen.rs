//! Implementation of the `mvigen screen` command.

use tracing::{info, instrument};

use mvigen_core::domain::ScreenConfig;

use crate::{
    cli::ScreenArgs,
    commands::{build_service, convert_nav, parse_nav_param, render_report},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mvigen screen` command.
#[instrument(skip_all, fields(feature = %args.name))]
pub fn execute(args: ScreenArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let nav_parameters = args
        .screen
        .nav_params
        .iter()
        .map(|s| parse_nav_param(s))
        .collect::<CliResult<Vec<_>>>()?;

    let screen = ScreenConfig {
        feature_name: args.name.clone(),
        navigation_style: convert_nav(args.screen.nav),
        nav_parameters,
        has_navigation_back: args.screen.back,
        inject_view_model: args.view_model,
    };

    let service = build_service(&args.target, &config)?;
    let report = service
        .generate_screen(&screen, &args.target.dir)
        .map_err(CliError::Core)?;

    info!(files = report.files.len(), "screen generated");
    render_report(&report, args.target.dry_run, &output)
}
