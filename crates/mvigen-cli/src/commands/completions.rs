//! Implementation of the `mvigen completions` command.

use clap::CommandFactory;
use clap_complete::{Shell as CompletionShell, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Generate a completion script on stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
    Ok(())
}
