//! Implementation of the `mvigen repo` command.

use tracing::{info, instrument};

use mvigen_core::domain::RepositoryConfig;

use crate::{
    cli::RepoArgs,
    commands::{build_service, convert_empty_policy, parse_method, render_report},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mvigen repo` command.
#[instrument(skip_all, fields(feature = %args.name))]
pub fn execute(args: RepoArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let methods = args
        .repo
        .methods
        .iter()
        .map(|s| parse_method(s))
        .collect::<CliResult<Vec<_>>>()?;

    let repository = RepositoryConfig {
        feature_name: args.name.clone(),
        methods,
        needs_http_client: args.repo.http_client,
        on_empty_methods: convert_empty_policy(args.repo.on_empty_methods),
    };

    let service = build_service(&args.target, &config)?;
    let report = service
        .generate_repository(&repository, &args.target.dir)
        .map_err(CliError::Core)?;

    info!(files = report.files.len(), skipped = report.repository_skipped, "repository generated");
    render_report(&report, args.target.dry_run, &output)
}
