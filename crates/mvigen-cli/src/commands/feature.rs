//! Implementation of the `mvigen feature` command.
//!
//! Responsibility: translate CLI arguments into a `FeatureConfig`, call the
//! core generation service, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use mvigen_core::domain::FeatureConfig;

use crate::{
    cli::FeatureArgs,
    commands::{build_service, convert_empty_policy, convert_nav, parse_method, parse_nav_param, render_report},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mvigen feature` command.
#[instrument(skip_all, fields(feature = %args.name))]
pub fn execute(args: FeatureArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let methods = args
        .repo
        .methods
        .iter()
        .map(|s| parse_method(s))
        .collect::<CliResult<Vec<_>>>()?;
    let nav_parameters = args
        .screen
        .nav_params
        .iter()
        .map(|s| parse_nav_param(s))
        .collect::<CliResult<Vec<_>>>()?;

    let feature = FeatureConfig {
        feature_name: args.name.clone(),
        generate_screen: !args.no_screen,
        generate_view_model: !args.no_view_model,
        generate_repository: !args.no_repo,
        events_enabled: args.view_model.events,
        refresh_enabled: args.view_model.refresh,
        ui_state_enabled: args.view_model.ui_state,
        load_on_init: args.view_model.load_on_init,
        use_cases: args.view_model.use_cases.clone(),
        methods,
        needs_http_client: args.repo.http_client,
        on_empty_methods: convert_empty_policy(args.repo.on_empty_methods),
        navigation_style: convert_nav(args.screen.nav),
        nav_parameters,
        has_navigation_back: args.screen.back,
    };

    debug!(
        screen = feature.generate_screen,
        view_model = feature.generate_view_model,
        repository = feature.generate_repository,
        nav = %feature.navigation_style,
        "feature config resolved"
    );

    let service = build_service(&args.target, &config)?;
    let report = service
        .generate_feature(&feature, &args.target.dir)
        .map_err(CliError::Core)?;

    info!(files = report.files.len(), "feature generated");
    render_report(&report, args.target.dry_run, &output)
}
