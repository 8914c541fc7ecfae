use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::UploadCommand;
use super::{CommandResult, CommandSummary, UploadSummary, helper::finish};
use crate::{
    config::load_config,
    core::parsers::locale::definition_lines,
    upload::{LocalizationClient, UploadSettings, unchanged_entries},
};

pub fn upload(cmd: UploadCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let root_dir = args.common.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(&root_dir)?.config;

    // Settings are resolved before any file is read so a missing key fails fast.
    let settings = if args.dry_run {
        None
    } else {
        Some(UploadSettings::resolve(
            &config.upload,
            args.api_key.as_deref(),
            args.project_id.as_deref(),
        )?)
    };

    let locale_file = match &args.common.locale_file {
        Some(path) => root_dir.join(path),
        None => root_dir.join(&config.locale_file),
    };
    let content = fs::read_to_string(&locale_file)
        .with_context(|| format!("Failed to read locale file: {}", locale_file.display()))?;
    let entries = definition_lines(&content);
    tracing::debug!(
        "Read {} entries from {}",
        entries.len(),
        locale_file.display()
    );

    let mut unchanged_count = None;
    if let Some(settings) = settings {
        let client = LocalizationClient::new(settings)?;
        if args.sync {
            let remote = client.export()?;
            let unchanged = unchanged_entries(&entries, &remote);
            client.import(&unchanged)?;
            unchanged_count = Some(unchanged.len());
        }
        client.import(&entries)?;
    }

    Ok(finish(
        CommandSummary::Upload(UploadSummary {
            entries,
            unchanged_count,
            is_dry_run: args.dry_run,
        }),
        Vec::new(),
        true,
    ))
}
