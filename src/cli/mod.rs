//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: one handler per subcommand, each returning a `CommandResult`
//! - `report`: colored console output for results

use anyhow::Result;
use tracing::debug;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{CommandResult, init::init, patch::patch, restore::restore};

/// Dispatch to the handler for `command`.
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Init(cmd) => init(cmd),
        Command::Patch(cmd) => patch(cmd),
        Command::Restore(cmd) => restore(cmd),
    }
}

/// Run the parsed arguments and print the result.
///
/// Prints help and succeeds when no subcommand was given.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run(command)?;
    debug!(command = ?result.kind(), "command finished");
    report::print(&result, verbose);

    Ok(ExitStatus::Success)
}
