use super::{CommandResult, CommandSummary};
use crate::cli::exit_status::ExitStatus;
use crate::issues::{Issue, Severity};

pub fn finish(summary: CommandSummary, issues: Vec<Issue>, exit_on_errors: bool) -> CommandResult {
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        summary,
        error_count,
        exit_on_errors,
        issues,
    }
}

pub fn exit_status(result: &CommandResult) -> ExitStatus {
    if result.exit_on_errors && result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
