use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();
    let command = args.command_or_default();

    let result = run::run(command)?;
    report::print(&result, verbose);

    Ok(commands::helper::exit_status(&result).into())
}
