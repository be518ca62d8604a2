//! Implementation of the `mvigen viewmodel` command.

use tracing::{info, instrument};

use mvigen_core::domain::StateContainerConfig;

use crate::{
    cli::ViewModelArgs,
    commands::{build_service, render_report},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mvigen viewmodel` command.
#[instrument(skip_all, fields(feature = %args.name))]
pub fn execute(args: ViewModelArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let state_container = StateContainerConfig {
        feature_name: args.name.clone(),
        events_enabled: args.view_model.events,
        refresh_enabled: args.view_model.refresh,
        ui_state_enabled: args.view_model.ui_state,
        load_on_init: args.view_model.load_on_init,
        use_cases: args.view_model.use_cases.clone(),
    };

    let service = build_service(&args.target, &config)?;
    let report = service
        .generate_state_container(&state_container, &args.target.dir)
        .map_err(CliError::Core)?;

    info!(files = report.files.len(), "viewmodel generated");
    render_report(&report, args.target.dry_run, &output)
}
