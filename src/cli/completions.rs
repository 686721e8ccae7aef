//! Shell completion scripts.

use super::Cli;
use anyhow::{bail, Result};
use clap::CommandFactory;
use clap_complete::Shell;

/// Write the completion script for `shell` (or the detected shell) to stdout.
pub fn generate(shell: Option<Shell>) -> Result<()> {
    let Some(shell) = shell.or_else(Shell::from_env) else {
        bail!("Could not detect the shell from $SHELL, pass one explicitly");
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());

    Ok(())
}
