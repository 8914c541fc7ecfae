//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Cross-check locale definitions against key references (default)
//! - `bindings`: Generate Bindings.xml from the configured key bindings
//! - `upload`: Upload locale definitions to the translation platform
//! - `init`: Initialize loclint configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run; `check` with default arguments when none was given.
    pub fn command_or_default(self) -> Command {
        self.command.unwrap_or_else(|| {
            Command::Check(CheckCommand {
                checks: Vec::new(),
                args: CheckArgs {
                    common: CommonArgs::default(),
                },
            })
        })
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Bindings(cmd)) => cmd.args.common.verbose,
            Some(Command::Upload(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Locale definition file (overrides config file)
    #[arg(long)]
    pub locale_file: Option<PathBuf>,

    /// Source directory scanned for references (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Checks to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct BindingsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate bindings for the classic client
    #[arg(short, long)]
    pub classic: bool,

    /// Output file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BindingsCommand {
    #[command(flatten)]
    pub args: BindingsArgs,
}

#[derive(Debug, Parser)]
pub struct UploadArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Translation platform API token
    #[arg(long, env = "CF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Project id on the translation platform (overrides config file)
    #[arg(long)]
    pub project_id: Option<String>,

    /// Upload unchanged entries first so stale remote phrases are deleted
    #[arg(long)]
    pub sync: bool,

    /// Print the entries that would be uploaded without uploading
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct UploadCommand {
    #[command(flatten)]
    pub args: UploadArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for unused locale keys and undefined key references
    Check(CheckCommand),
    /// Generate the Bindings.xml key binding file
    Bindings(BindingsCommand),
    /// Upload locale definitions to the translation platform
    Upload(UploadCommand),
    /// Initialize a new .loclintrc.json configuration file
    Init,
}
