use anyhow::Result;

use super::{
    args::Command,
    commands::CommandResult,
    commands::{bindings::bindings, check::check, init::init, upload::upload},
};

/// Dispatch to the handler of `command`.
///
/// # Returns
/// - `Ok(CommandResult)` with issues and exit behavior
/// - `Err` if the command fails (e.g., config invalid, locale file missing)
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Check(cmd) => check(cmd),
        Command::Bindings(cmd) => bindings(cmd),
        Command::Upload(cmd) => upload(cmd),
        Command::Init => init(),
    }
}
