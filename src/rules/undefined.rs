//! Undefined locale key detection rule.
//!
//! Detects keys referenced in source files (`L.KEY`) that have no
//! definition in the locale file.

use crate::{
    core::{CheckContext, KeyReferences, ValidationResult},
    issues::UndefinedKeyIssue,
};

pub fn check_undefined_keys_issues(ctx: &CheckContext) -> Vec<UndefinedKeyIssue> {
    check_undefined_keys(&ctx.references, ctx.validation())
}

/// Build issues for the undefined keys of `validation`, in first-reference
/// order, carrying every reference location.
pub fn check_undefined_keys(
    references: &KeyReferences,
    validation: &ValidationResult,
) -> Vec<UndefinedKeyIssue> {
    validation
        .undefined
        .iter()
        .filter_map(|key| {
            let usages = references.get(key)?;
            let first = usages.first()?;
            Some(UndefinedKeyIssue {
                context: first.clone(),
                key: key.clone(),
                usages: usages.to_vec(),
            })
        })
        .collect()
}
