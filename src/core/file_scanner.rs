use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// What to scan for key references.
pub struct ScanOptions<'a> {
    /// Project root; every other path is relative to it.
    pub root: &'a Path,
    /// Directory walked recursively for source files.
    pub source_root: &'a Path,
    /// File extensions to collect, without the leading dot.
    pub extensions: &'a [String],
    /// Files always scanned first, when they exist.
    pub entry_files: &'a [String],
    /// Literal paths or glob patterns to skip.
    pub ignores: &'a [String],
}

/// Result of scanning files.
pub struct ScanResult {
    /// Entry files first, then the walked files sorted by path.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn scan_files(options: &ScanOptions<'_>) -> ScanResult {
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("Invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(options.root.join(p));
        }
    }

    let is_ignored = |path: &Path| {
        literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
            || glob_patterns
                .iter()
                .any(|p| p.matches(&path.to_string_lossy()))
    };

    let mut files: Vec<String> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for entry_file in options.entry_files {
        let path = options.root.join(entry_file);
        if !path.is_file() {
            tracing::debug!("Entry file not found, skipping: {}", path.display());
            continue;
        }
        if is_ignored(&path) {
            continue;
        }
        if seen.insert(path.clone()) {
            files.push(path.to_string_lossy().into());
        }
    }

    let source_dir = options.root.join(options.source_root);
    if !source_dir.exists() {
        tracing::warn!("Source root does not exist: {}", source_dir.display());
    }

    let mut walked: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(&source_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // A missing source root is reported above, not as a skipped path.
                if e.depth() > 0 {
                    skipped_count += 1;
                    tracing::warn!("Cannot access path: {}", e);
                }
                continue;
            }
        };
        let path = entry.path();

        if is_ignored(path) {
            continue;
        }

        if path.is_file() && has_extension(path, options.extensions) {
            walked.push(path.to_path_buf());
        }
    }

    walked.sort();
    for path in walked {
        if seen.insert(path.clone()) {
            files.push(path.to_string_lossy().into());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
