//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the core so
//! loclint can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    BindingsSummary, CheckSummary, CommandResult, CommandSummary, InitSummary, UploadSummary,
};
use crate::config::{CONFIG_FILE_NAME, Flavor};
use crate::core::SourceContext;
use crate::issues::{Issue, Report, ReportLocation, Rule, Severity};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format, in the order given.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print the progress lines of a check.
pub fn print_progress_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Retrieving entries... {} found.",
        summary.entry_count
    );
    let _ = writeln!(
        writer,
        "Retrieving references... {} found.",
        summary.reference_count
    );
    let _ = writeln!(writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let msg = format!(
        "Checked {}, {} - no issues found",
        pluralize(summary.source_files_checked, "source file", "source files"),
        pluralize(summary.entry_count, "locale entry", "locale entries"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    print_usages(issue.usages(), writer, max_line_width);

    let _ = writeln!(writer); // Empty line between issues
}

fn print_usages<W: Write>(usages: &[SourceContext], writer: &mut W, max_line_width: usize) {
    for usage in usages {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}:{}:{}",
            "",
            "=".blue(),
            "used:".bold(),
            usage.file_path(),
            usage.line(),
            usage.col(),
            width = max_line_width
        );
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let count_rule = |rule: Rule| issues.iter().filter(|i| i.rule() == rule).count();
    let unused = count_rule(Rule::UnusedKey);
    let undefined = count_rule(Rule::UndefinedKey);

    let _ = writeln!(
        writer,
        "{} {} ({}, {})",
        FAILURE_MARK.red(),
        pluralize(issues.len(), "problem", "problems"),
        pluralize(unused, "unused key", "unused keys").red(),
        pluralize(undefined, "undefined key", "undefined keys").red(),
    );
}

fn extract_location_info<'a>(
    loc: &ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match *loc {
        ReportLocation::Source(ctx) => (
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            Some(ctx.source_line.as_str()),
        ),
        ReportLocation::Definition(loc) => (loc.file_path.as_str(), loc.line, loc.col, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::Definition(_) => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    print_to(result, verbose, &mut stdout);
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            print_progress_to(summary, writer);
            if result.issues.is_empty() {
                print_success_to(summary, writer);
            } else {
                report_to(&result.issues, writer);
            }
            print_skipped_warning(summary.skipped_count, verbose);
        }
        CommandSummary::Bindings(summary) => print_bindings(summary, writer),
        CommandSummary::Upload(summary) => print_upload(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Print a warning about paths that could not be walked.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a skipped-path warning to a custom writer.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_bindings<W: Write>(summary: &BindingsSummary, writer: &mut W) {
    let flavor = match summary.flavor {
        Flavor::Classic => "classic",
        Flavor::Retail => "retail",
    };
    let msg = format!(
        "Wrote {} ({}) to {}",
        pluralize(summary.binding_count, "binding", "bindings"),
        flavor,
        summary.output
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_upload<W: Write>(summary: &UploadSummary, writer: &mut W) {
    if let Some(unchanged) = summary.unchanged_count {
        let _ = writeln!(
            writer,
            "{} {} to delete stale phrases.",
            "Uploaded".green().bold(),
            pluralize(unchanged, "unchanged entry", "unchanged entries")
        );
    }

    let verb = if summary.is_dry_run {
        "Would upload".yellow().bold()
    } else {
        "Uploaded".green().bold()
    };
    let _ = writeln!(
        writer,
        "{} {}:",
        verb,
        pluralize(summary.entries.len(), "entry", "entries")
    );
    for entry in &summary.entries {
        let _ = writeln!(writer, "  {}", entry);
    }

    if summary.is_dry_run {
        let _ = writeln!(writer, "Run without {} to upload.", "--dry-run".cyan());
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), "Success!".green());
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
