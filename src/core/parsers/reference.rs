use std::{fs, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::{KeyReference, KeyReferences, SourceContext, SourceLocation};

/// `L.KEY` with word boundaries on both sides.
static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bL\.(\w+)\b").unwrap());

/// How many references are recorded per source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Only the leftmost reference on each line.
    #[default]
    FirstPerLine,
    /// Every reference on the line.
    AllPerLine,
}

impl MatchPolicy {
    pub fn from_all_matches(all_matches_per_line: bool) -> Self {
        if all_matches_per_line {
            MatchPolicy::AllPerLine
        } else {
            MatchPolicy::FirstPerLine
        }
    }
}

/// Read every file in `files` (in the given order) and group the key
/// references found in them.
///
/// Any unreadable file aborts the whole extraction.
pub fn extract_references(files: &[String], policy: MatchPolicy) -> Result<KeyReferences> {
    let mut references = KeyReferences::new();

    for file_path in files {
        let bytes =
            fs::read(file_path).with_context(|| format!("Failed to read file: {}", file_path))?;
        let content = String::from_utf8_lossy(&bytes);
        let found = scan_source(&content, file_path, policy);
        tracing::debug!("{}: {} reference(s)", file_path, found.len());
        for reference in found {
            references.insert(reference);
        }
    }

    Ok(references)
}

/// Find key references in one file's content, in line order.
pub fn scan_source(content: &str, file_path: &str, policy: MatchPolicy) -> Vec<KeyReference> {
    let mut found = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let mut record = |caps: regex::Captures<'_>| {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                return;
            };
            let col = line[..whole.start()].chars().count() + 1;
            found.push(KeyReference::new(
                key.as_str(),
                SourceContext::new(SourceLocation::new(file_path, line_no, col), line),
            ));
        };

        match policy {
            MatchPolicy::FirstPerLine => {
                if let Some(caps) = REFERENCE_REGEX.captures(line) {
                    record(caps);
                }
            }
            MatchPolicy::AllPerLine => {
                for caps in REFERENCE_REGEX.captures_iter(line) {
                    record(caps);
                }
            }
        }
    }

    found
}
