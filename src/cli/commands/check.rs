use std::collections::HashSet;

use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{undefined::check_undefined_keys_issues, unused::check_unused_keys_issues},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unused,
    Undefined,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::Unused, CheckRule::Undefined]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        let mut seen = HashSet::new();
        cmd.checks
            .iter()
            .copied()
            .filter(|c| seen.insert(*c))
            .collect()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Unused => {
                let issues = check_unused_keys_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnusedKey));
            }
            CheckRule::Undefined => {
                let issues = check_undefined_keys_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::UndefinedKey));
            }
        }
    }

    let summary = CheckSummary {
        entry_count: ctx.definitions.len(),
        reference_count: ctx.references.len(),
        source_files_checked: ctx.files.len(),
        skipped_count: ctx.skipped_count,
    };

    Ok(finish(CommandSummary::Check(summary), all_issues, true))
}
