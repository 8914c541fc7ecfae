use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::{LocaleDefinitions, LocaleEntry, SourceLocation};

/// Prefix of a definition line once leading whitespace is trimmed.
pub const DEFINITION_PREFIX: &str = "L[";

/// `L["KEY"] = ...`: the key is the quoted text up to the first `"]` followed by a space.
static DEFINITION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^L\["(.+?)"\] "#).unwrap());

/// Read the locale file at `path` and collect its definitions in file order.
///
/// Fails if the file cannot be read.
pub fn extract_defined_keys(path: &Path) -> Result<LocaleDefinitions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
    Ok(parse_locale_source(&content, &path.to_string_lossy()))
}

/// Collect definitions from locale file content.
///
/// Lines that are not definitions (comments, blank lines, the `local L = ...`
/// header) are skipped.
pub fn parse_locale_source(content: &str, file_path: &str) -> LocaleDefinitions {
    let mut definitions = LocaleDefinitions::new(file_path);

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if !line.starts_with(DEFINITION_PREFIX) {
            continue;
        }
        let Some(key) = DEFINITION_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };
        definitions.push(LocaleEntry::new(
            key,
            SourceLocation::with_line(file_path, idx + 1),
        ));
    }

    definitions
}

/// Definition lines of a locale file, trimmed, exactly as they would be sent
/// to the translation platform.
pub fn definition_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(DEFINITION_PREFIX))
        .map(String::from)
        .collect()
}
