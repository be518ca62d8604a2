//! Command handlers plus the CLI→core translation helpers they share.

pub mod completions;
pub mod feature;
pub mod repo;
pub mod screen;
pub mod settings;
pub mod viewmodel;

use mvigen_adapters::{LocalFileSink, MemoryFileSink, SettingsFile, SourceRootResolver};
use mvigen_core::{
    application::{GenerationReport, GenerationService},
    domain::{
        DomainError, EmptyMethodPolicy, NavParameter, NavigationStyle, RepoMethod,
        TypePathSettings,
    },
};

use crate::{
    cli::{EmptyPolicy, NavStyle, TargetArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

// ── Spec parsing ──────────────────────────────────────────────────────────────

/// Parse a method spec of the form `name(params)` or `name(params) -> Ret`.
///
/// `params` is carried verbatim; the return type defaults to blank (rendered
/// as `Unit`).
pub fn parse_method(spec: &str) -> CliResult<RepoMethod> {
    let invalid = |reason: &str| {
        CliError::Core(
            DomainError::InvalidMethodSpec {
                spec: spec.to_string(),
                reason: reason.to_string(),
            }
            .into(),
        )
    };

    let trimmed = spec.trim();
    let open = trimmed.find('(').ok_or_else(|| invalid("missing '('"))?;
    let close = trimmed.rfind(')').ok_or_else(|| invalid("missing ')'"))?;
    if close < open {
        return Err(invalid("')' appears before '('"));
    }

    let name = trimmed[..open].trim();
    if name.is_empty() {
        return Err(invalid("missing method name"));
    }

    let parameters = trimmed[open + 1..close].trim();
    let rest = trimmed[close + 1..].trim();
    let return_type = if rest.is_empty() {
        ""
    } else {
        rest.strip_prefix("->")
            .map(str::trim)
            .ok_or_else(|| invalid("expected '->' before the return type"))?
    };

    Ok(RepoMethod::new(name, return_type, parameters))
}

/// Parse a navigation parameter of the form `name:Type`.
pub fn parse_nav_param(spec: &str) -> CliResult<NavParameter> {
    let invalid = || {
        CliError::Core(
            DomainError::InvalidNavParameter {
                spec: spec.to_string(),
            }
            .into(),
        )
    };

    let (name, ty) = spec.split_once(':').ok_or_else(invalid)?;
    let (name, ty) = (name.trim(), ty.trim());
    if name.is_empty() || ty.is_empty() {
        return Err(invalid());
    }
    Ok(NavParameter::new(name, ty))
}

// ── CLI → core enum conversions ───────────────────────────────────────────────

pub fn convert_nav(style: NavStyle) -> NavigationStyle {
    match style {
        NavStyle::None => NavigationStyle::None,
        NavStyle::Simple => NavigationStyle::Simple,
        NavStyle::TypeSafe => NavigationStyle::TypeSafe,
    }
}

pub fn convert_empty_policy(policy: EmptyPolicy) -> EmptyMethodPolicy {
    match policy {
        EmptyPolicy::Skip => EmptyMethodPolicy::Skip,
        EmptyPolicy::Fail => EmptyMethodPolicy::Fail,
    }
}

// ── Service assembly ──────────────────────────────────────────────────────────

/// Load the base-type settings from the configured store.
pub fn load_settings(config: &AppConfig) -> CliResult<TypePathSettings> {
    SettingsFile::new(config.settings_path())
        .load()
        .map_err(CliError::Core)
}

/// Build a generation service for the target.
///
/// A dry run swaps the local sink for an in-memory one, so the full
/// pipeline (validation included) executes without touching the disk.
pub fn build_service(target: &TargetArgs, config: &AppConfig) -> CliResult<GenerationService> {
    let settings = load_settings(config)?;

    let resolver = match target
        .source_root
        .clone()
        .or_else(|| config.generation.source_root.clone())
    {
        Some(root) => SourceRootResolver::with_source_root(root),
        None => SourceRootResolver::new(),
    };

    let sink: Box<dyn mvigen_core::application::FileSink> = if target.dry_run {
        Box::new(MemoryFileSink::new())
    } else {
        Box::new(LocalFileSink::new())
    };

    Ok(GenerationService::new(sink, Box::new(resolver), settings))
}

// ── Report rendering ──────────────────────────────────────────────────────────

/// Print the outcome of a generation run.
pub fn render_report(
    report: &GenerationReport,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == crate::cli::OutputFormat::Json {
        let payload = serde_json::json!({
            "files": report.files,
            "repository_skipped": report.repository_skipped,
            "dry_run": dry_run,
        });
        output.print(&payload.to_string())?;
        return Ok(());
    }

    if report.repository_skipped {
        output.warning("Repository skipped: no methods declared")?;
    }

    if dry_run {
        output.info(&format!("Dry run: would write {} file(s)", report.files.len()))?;
    } else {
        output.success(&format!("Generated {} file(s)", report.files.len()))?;
    }
    for file in &report.files {
        output.print(&format!("  {}", file.display()))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_method ──────────────────────────────────────────────────────

    #[test]
    fn method_with_params_and_return() {
        let m = parse_method("getUser(id: String) -> User").unwrap();
        assert_eq!(m.name, "getUser");
        assert_eq!(m.parameters, "id: String");
        assert_eq!(m.return_type, "User");
    }

    #[test]
    fn method_without_return_type() {
        let m = parse_method("sync()").unwrap();
        assert_eq!(m.name, "sync");
        assert_eq!(m.parameters, "");
        assert_eq!(m.rendered_return_type(), "Unit");
    }

    #[test]
    fn generic_return_type_survives() {
        let m = parse_method("getUsers() -> List<User>").unwrap();
        assert_eq!(m.return_type, "List<User>");
    }

    #[test]
    fn multi_parameter_signature_is_verbatim() {
        let m = parse_method("search(query: String, page: Int) -> Page<User>").unwrap();
        assert_eq!(m.parameters, "query: String, page: Int");
    }

    #[test]
    fn malformed_methods_are_rejected() {
        assert!(parse_method("getUser").is_err());
        assert!(parse_method("(id: String)").is_err());
        assert!(parse_method("getUser(id: String) User").is_err());
        assert!(parse_method("getUser) -> (User").is_err());
    }

    // ── parse_nav_param ───────────────────────────────────────────────────

    #[test]
    fn nav_param_parses() {
        let p = parse_nav_param("userId:String").unwrap();
        assert_eq!(p.name, "userId");
        assert_eq!(p.ty, "String");
    }

    #[test]
    fn nav_param_trims_whitespace() {
        let p = parse_nav_param(" page : Int ").unwrap();
        assert_eq!(p.name, "page");
        assert_eq!(p.ty, "Int");
    }

    #[test]
    fn malformed_nav_params_are_rejected() {
        assert!(parse_nav_param("userId").is_err());
        assert!(parse_nav_param(":String").is_err());
        assert!(parse_nav_param("userId:").is_err());
    }
}
