//! Common utility functions shared across the codebase.

/// Formats a count with the matching singular or plural noun.
///
/// # Examples
///
/// ```
/// use loclint::utils::pluralize;
///
/// assert_eq!(pluralize(1, "entry", "entries"), "1 entry");
/// assert_eq!(pluralize(0, "entry", "entries"), "0 entries");
/// assert_eq!(pluralize(3, "key", "keys"), "3 keys");
/// ```
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };
    format!("{} {}", count, word)
}
