//! Shell completions handler

use crate::cli::Shell;
use crate::error::Result;
use clap::CommandFactory;
use std::io::{self, Write};

/// Print completions for `shell` to stdout
pub fn handle_completions(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout())
}

/// Write completions for `shell` to any writer
pub fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();

    clap_complete::generate(shell.to_clap_shell(), &mut cmd, name, out);
    out.flush()?;

    Ok(())
}
