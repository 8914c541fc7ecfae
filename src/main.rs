use std::process::ExitCode;

use clap::Parser;
use loclint::cli::{Arguments, ExitStatus};
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();

    let level = if args.verbose() {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    match loclint::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
