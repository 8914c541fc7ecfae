//! Issue types for locale consistency results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it.

use enum_dispatch::enum_dispatch;

use crate::core::{SourceContext, SourceLocation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnusedKey,
    UndefinedKey,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::UndefinedKey => write!(f, "undefined-key"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key defined in the locale file but never referenced in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    /// First definition of the key.
    pub location: SourceLocation,
    pub key: String,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

/// Key referenced in source but missing from the locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedKeyIssue {
    /// First reference to the key.
    pub context: SourceContext,
    pub key: String,
    /// Every reference to the key, in scan order.
    pub usages: Vec<SourceContext>,
}

impl UndefinedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UndefinedKey
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A locale consistency issue.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnusedKey(UnusedKeyIssue),
    UndefinedKey(UndefinedKeyIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnusedKey(_) => UnusedKeyIssue::severity(),
            Issue::UndefinedKey(_) => UndefinedKeyIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnusedKey(_) => UnusedKeyIssue::rule(),
            Issue::UndefinedKey(_) => UndefinedKeyIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source location with the line text (shown with a caret).
    Source(&'a SourceContext),
    /// Definition in the locale file (location only).
    Definition(&'a SourceLocation),
}

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (the key).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Reference locations for the "= used:" lines.
    fn usages(&self) -> &[SourceContext] {
        &[]
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Definition(&self.location)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("defined but never referenced".to_string())
    }
}

impl Report for UndefinedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("referenced but never defined".to_string())
    }

    fn usages(&self) -> &[SourceContext] {
        &self.usages
    }
}

// ============================================================
// Tests
// ============================================================
