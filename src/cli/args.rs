//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Build a language sheet of a `.xlsx` file from a `.strings` file
//! - `patch`: Update values of a `.xlsx` file from a `.strings` or another `.xlsx` file
//! - `restore`: Write a `.strings` file back out of a `.xlsx` file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::lang::Lang;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.command
            .as_ref()
            .is_some_and(|cmd| cmd.common().verbose)
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Language code, selects the sheet (overrides config file, default: base)
    #[arg(long, value_enum)]
    pub lang: Option<Lang>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Source .strings file
    pub strings: PathBuf,
    /// Output .xlsx file, created if missing
    pub output: PathBuf,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PatchCommand {
    /// Patch source, a .strings or .xlsx file
    pub patch: PathBuf,
    /// The .xlsx file to update in place
    pub translate: PathBuf,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RestoreCommand {
    /// Source .xlsx file
    pub translate: PathBuf,
    /// Output directory, the file is written to <OUTPUT>/<lang>/
    pub output: PathBuf,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a translation sheet from a .strings file
    Init(InitCommand),
    /// Update translations in a .xlsx file from a .strings or .xlsx file
    Patch(PatchCommand),
    /// Restore a .strings file from a translation sheet
    Restore(RestoreCommand),
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Init(cmd) => &cmd.common,
            Command::Patch(cmd) => &cmd.common,
            Command::Restore(cmd) => &cmd.common,
        }
    }
}
