//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `rename`: Rename files whose name does not match the type they declare
//! - `init`: Initialize the typenamer configuration file

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Rename(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by file-processing commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct RenameArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rename files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct RenameCommand {
    /// Files or directories to process (default: scan the configured source root)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub args: RenameArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rename files whose name does not match the single type they declare
    Rename(RenameCommand),
    /// Initialize a new .typenamerrc.json configuration file
    Init,
}
