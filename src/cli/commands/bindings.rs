use std::path::PathBuf;

use anyhow::Result;

use super::super::args::BindingsCommand;
use super::{BindingsSummary, CommandResult, CommandSummary, helper::finish};
use crate::{bindings::write_bindings, config::Flavor, config::load_config};

pub fn bindings(cmd: BindingsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let root_dir = args.common.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(&root_dir)?.config;

    let flavor = if args.classic {
        Flavor::Classic
    } else {
        Flavor::Retail
    };
    let output = match &args.output {
        Some(path) => root_dir.join(path),
        None => root_dir.join(&config.bindings.output),
    };

    let binding_count = write_bindings(&config.bindings, flavor, &output)?;
    tracing::debug!("Wrote {} binding(s) to {}", binding_count, output.display());

    Ok(finish(
        CommandSummary::Bindings(BindingsSummary {
            output: output.to_string_lossy().to_string(),
            flavor,
            binding_count,
        }),
        Vec::new(),
        true,
    ))
}
