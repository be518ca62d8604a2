//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mvigen",
    bin_name = "mvigen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} MVI feature scaffolding for Compose codebases",
    long_about = "Mvigen generates screen, viewmodel, and repository files \
                  wired together in the MVI pattern, with packages derived \
                  from the target directory.",
    after_help = "EXAMPLES:\n\
        \x20 mvigen feature 'Forget Password' --dir app/src/main/kotlin/com/app --refresh --ui-state\n\
        \x20 mvigen repo user --dir app/src/main/kotlin/com/app --method 'getUser(id: String) -> User'\n\
        \x20 mvigen screen home --dir app/src/main/kotlin/com/app --nav simple\n\
        \x20 mvigen completions bash > /usr/share/bash-completion/completions/mvigen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a full feature: screen, viewmodel, repository.
    #[command(
        visible_alias = "f",
        about = "Generate a full feature",
        after_help = "EXAMPLES:\n\
            \x20 mvigen feature home --dir src/main/kotlin/com/app\n\
            \x20 mvigen feature 'Forget Password' --dir src --refresh --ui-state --nav simple\n\
            \x20 mvigen feature user --dir src --method 'getUser(id: String) -> User' --http-client"
    )]
    Feature(FeatureArgs),

    /// Generate the state/viewmodel pair only.
    #[command(
        visible_alias = "vm",
        about = "Generate a viewmodel with its state declarations",
        after_help = "EXAMPLES:\n\
            \x20 mvigen viewmodel home --dir src/main/kotlin/com/app --ui-state\n\
            \x20 mvigen viewmodel profile --dir src --events --use-case FetchProfile"
    )]
    Viewmodel(ViewModelArgs),

    /// Generate the repository interface/implementation pair only.
    #[command(
        about = "Generate a repository pair",
        after_help = "EXAMPLES:\n\
            \x20 mvigen repo user --dir src --method 'getUsers() -> List<User>'\n\
            \x20 mvigen repo user --dir src --method 'sync()' --http-client"
    )]
    Repo(RepoArgs),

    /// Generate the screen (and optional navigation) only.
    #[command(
        about = "Generate a screen",
        after_help = "EXAMPLES:\n\
            \x20 mvigen screen home --dir src --nav simple\n\
            \x20 mvigen screen profile --dir src --nav type-safe --nav-param userId:String --back"
    )]
    Screen(ScreenArgs),

    /// Manage the base-type path settings.
    #[command(
        about = "Settings management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mvigen settings list\n\
            \x20 mvigen settings set view-model com.myapp.core.AppViewModel\n\
            \x20 mvigen settings get state"
    )]
    Settings(SettingsCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mvigen completions bash > ~/.local/share/bash-completion/completions/mvigen\n\
            \x20 mvigen completions zsh  > ~/.zfunc/_mvigen\n\
            \x20 mvigen completions fish > ~/.config/fish/completions/mvigen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared generation args ────────────────────────────────────────────────────

/// Where generated files go and how packages are resolved.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Directory that receives the generated tree.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Base directory for generated files"
    )]
    pub dir: PathBuf,

    /// Source root used for package resolution.  Without it, the directory
    /// path is scanned for a `kotlin`/`java` source-set marker.
    #[arg(
        long = "source-root",
        value_name = "DIR",
        help = "Source root for package resolution"
    )]
    pub source_root: Option<PathBuf>,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

/// Viewmodel capability flags shared by `feature` and `viewmodel`.
#[derive(Debug, Args)]
pub struct ViewModelFlags {
    /// Generate an event hierarchy alongside the state.
    #[arg(long = "events", help = "Enable one-shot events")]
    pub events: bool,

    /// Enable pull-to-refresh support.
    #[arg(long = "refresh", help = "Enable refresh support")]
    pub refresh: bool,

    /// Generate a UI-state record.
    #[arg(long = "ui-state", help = "Enable a UI state record")]
    pub ui_state: bool,

    /// Dispatch the load intent when the viewmodel is constructed.
    #[arg(long = "load-on-init", help = "Trigger the load routine on construction")]
    pub load_on_init: bool,

    /// Use case injected into the viewmodel constructor (repeatable).
    #[arg(
        long = "use-case",
        value_name = "NAME",
        help = "Inject a <NAME>UseCase constructor parameter (repeatable)"
    )]
    pub use_cases: Vec<String>,
}

/// Repository flags shared by `feature` and `repo`.
#[derive(Debug, Args)]
pub struct RepoFlags {
    /// Method signature, e.g. `getUser(id: String) -> User` (repeatable).
    #[arg(
        short = 'm',
        long = "method",
        value_name = "SPEC",
        help = "Repository method 'name(params) -> Ret' (repeatable)"
    )]
    pub methods: Vec<String>,

    /// Inject an HTTP client into the implementation.
    #[arg(long = "http-client", help = "Inject an HttpClient into the implementation")]
    pub http_client: bool,

    /// Behavior when no methods are declared.
    #[arg(
        long = "on-empty-methods",
        value_enum,
        default_value = "skip",
        help = "What to do when no methods are declared"
    )]
    pub on_empty_methods: EmptyPolicy,
}

/// Screen flags shared by `feature` and `screen`.
#[derive(Debug, Args)]
pub struct ScreenFlags {
    /// Navigation style.
    #[arg(
        long = "nav",
        value_enum,
        default_value = "none",
        help = "Navigation style"
    )]
    pub nav: NavStyle,

    /// Navigation parameter `name:Type` (repeatable, type-safe style only).
    #[arg(
        long = "nav-param",
        value_name = "NAME:TYPE",
        help = "Typed navigation parameter (repeatable)"
    )]
    pub nav_params: Vec<String>,

    /// Thread a back-navigation callback through the screen.
    #[arg(long = "back", help = "Add a navigationBack callback")]
    pub back: bool,
}

// ── feature ───────────────────────────────────────────────────────────────────

/// Arguments for `mvigen feature`.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    /// Feature name in any casing, e.g. `home` or `'Forget Password'`.
    #[arg(value_name = "NAME", allow_hyphen_values = true, help = "Feature name")]
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub view_model: ViewModelFlags,

    #[command(flatten)]
    pub repo: RepoFlags,

    #[command(flatten)]
    pub screen: ScreenFlags,

    /// Skip screen generation.
    #[arg(long = "no-screen", help = "Skip the screen")]
    pub no_screen: bool,

    /// Skip viewmodel generation.
    #[arg(long = "no-viewmodel", help = "Skip the viewmodel")]
    pub no_view_model: bool,

    /// Skip repository generation.
    #[arg(long = "no-repo", help = "Skip the repository")]
    pub no_repo: bool,
}

// ── viewmodel / repo / screen ─────────────────────────────────────────────────

/// Arguments for `mvigen viewmodel`.
#[derive(Debug, Args)]
pub struct ViewModelArgs {
    /// Feature name.
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub view_model: ViewModelFlags,
}

/// Arguments for `mvigen repo`.
#[derive(Debug, Args)]
pub struct RepoArgs {
    /// Feature name.
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub repo: RepoFlags,
}

/// Arguments for `mvigen screen`.
#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Feature name.
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub screen: ScreenFlags,

    /// Inject a viewmodel into the route function.
    #[arg(long = "view-model", help = "Inject a viewmodel into the route")]
    pub view_model: bool,
}

// ── settings subcommands ──────────────────────────────────────────────────────

/// Subcommands for `mvigen settings`.
#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Print the value of a settings key.
    Get {
        /// Key name, e.g. `view-model`.
        key: String,
    },
    /// Set a settings key to an import path.
    Set {
        /// Key name.
        key: String,
        /// Dotted import path.
        value: String,
    },
    /// Print all settings values and their validation status.
    List,
    /// Print the path to the settings file.
    Path,
    /// Write the default settings file.
    Init {
        /// Overwrite an existing settings file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing settings")]
        force: bool,
    },
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mvigen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Navigation styles accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum NavStyle {
    None,
    Simple,
    /// Also accepted as `typesafe`.
    #[value(alias = "typesafe")]
    TypeSafe,
}

/// Empty-method-list behaviors accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EmptyPolicy {
    Skip,
    Fail,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_feature_command() {
        let cli = Cli::parse_from([
            "mvigen",
            "feature",
            "Forget Password",
            "--dir",
            "src/main/kotlin/com/app",
            "--refresh",
            "--ui-state",
        ]);
        match cli.command {
            Commands::Feature(args) => {
                assert_eq!(args.name, "Forget Password");
                assert!(args.view_model.refresh);
                assert!(args.view_model.ui_state);
                assert!(!args.view_model.events);
            }
            other => panic!("expected Feature, got {other:?}"),
        }
    }

    #[test]
    fn methods_are_repeatable() {
        let cli = Cli::parse_from([
            "mvigen",
            "repo",
            "user",
            "--method",
            "getUsers() -> List<User>",
            "--method",
            "sync()",
        ]);
        match cli.command {
            Commands::Repo(args) => assert_eq!(args.repo.methods.len(), 2),
            other => panic!("expected Repo, got {other:?}"),
        }
    }

    #[test]
    fn typesafe_alias() {
        let cli = Cli::parse_from(["mvigen", "screen", "home", "--nav", "typesafe"]);
        match cli.command {
            Commands::Screen(args) => assert_eq!(args.screen.nav, NavStyle::TypeSafe),
            other => panic!("expected Screen, got {other:?}"),
        }
    }

    #[test]
    fn on_empty_methods_defaults_to_skip() {
        let cli = Cli::parse_from(["mvigen", "repo", "user"]);
        match cli.command {
            Commands::Repo(args) => assert_eq!(args.repo.on_empty_methods, EmptyPolicy::Skip),
            other => panic!("expected Repo, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["mvigen", "--quiet", "--verbose", "settings", "list"]);
        assert!(result.is_err());
    }
}
