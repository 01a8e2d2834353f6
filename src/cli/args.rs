//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Analyze acronym usage and write the document report
//! - `init`: Initialize acrolint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Entry file, relative to the root directory (overrides config file)
    #[arg(long)]
    pub entry: Option<PathBuf>,

    /// Document root directory; includes are resolved against it (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Report file; .html/.htm or .md/.markdown (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parenthetical mentions needed before an undefined acronym is reported
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Only print the terminal listing, do not write the report file
    #[arg(long)]
    pub no_report: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check acronym consistency and write the report
    Check(CheckCommand),
    /// Initialize a new .acrolintrc.json configuration file
    Init,
}
