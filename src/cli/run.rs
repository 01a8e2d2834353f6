use std::path::Path;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// `Err` means the run could not complete (configuration, missing include,
/// unwritable report); issues found in the document are not errors here.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
