//! Unused locale key detection rule.
//!
//! Detects keys that are defined in the locale file but never referenced
//! by any scanned source file.

use crate::{
    core::{CheckContext, LocaleDefinitions, ValidationResult},
    issues::UnusedKeyIssue,
};

pub fn check_unused_keys_issues(ctx: &CheckContext) -> Vec<UnusedKeyIssue> {
    check_unused_keys(&ctx.definitions, ctx.validation())
}

/// Build issues for the unused keys of `validation`, in definition order.
///
/// Each issue points at the first definition of its key.
pub fn check_unused_keys(
    definitions: &LocaleDefinitions,
    validation: &ValidationResult,
) -> Vec<UnusedKeyIssue> {
    validation
        .unused
        .iter()
        .filter_map(|key| definitions.get(key))
        .map(|entry| UnusedKeyIssue {
            location: entry.location.clone(),
            key: entry.key.clone(),
        })
        .collect()
}
