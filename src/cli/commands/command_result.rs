use crate::config::Flavor;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Bindings(BindingsSummary),
    Upload(UploadSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Number of definition lines read from the locale file.
    pub entry_count: usize,
    /// Number of distinct referenced keys.
    pub reference_count: usize,
    pub source_files_checked: usize,
    /// Paths under the source root that could not be walked.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct BindingsSummary {
    pub output: String,
    pub flavor: Flavor,
    pub binding_count: usize,
}

#[derive(Debug)]
pub struct UploadSummary {
    /// Definition lines uploaded (or that would be, on a dry run).
    pub entries: Vec<String>,
    /// Entries uploaded in the first pass of a sync.
    pub unchanged_count: Option<usize>,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running loclint commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
}
