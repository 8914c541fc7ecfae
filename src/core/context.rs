use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        KeyReferences, LocaleDefinitions, ValidationResult,
        file_scanner::{ScanOptions, scan_files},
        parsers::{
            locale::extract_defined_keys,
            reference::{MatchPolicy, extract_references},
        },
        validate::validate,
    },
};

/// Everything a locale check needs, loaded once per run.
///
/// Definitions and references are read eagerly so a missing or unreadable
/// file aborts the run before anything is reported. The validation result is
/// computed on first access.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--locale-file`)
/// 2. `.loclintrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Source files scanned for references, in scan order.
    pub files: Vec<String>,

    /// Paths that could not be walked.
    pub skipped_count: usize,

    pub definitions: LocaleDefinitions,

    pub references: KeyReferences,

    validation: OnceCell<ValidationResult>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - The locale file does not exist or cannot be read
    /// - A scanned source file cannot be read
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        let mut config = config_result.config;
        if !config_result.from_file {
            tracing::debug!("No config file found, using defaults");
        }

        if let Some(locale_file) = &common_args.locale_file {
            config.locale_file = locale_file.to_string_lossy().to_string();
        }
        if let Some(source_root) = &common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }

        Self::from_config(config, root_dir)
    }

    /// Load definitions and references for an already merged configuration.
    pub fn from_config(config: Config, root_dir: PathBuf) -> Result<Self> {
        let locale_file = root_dir.join(&config.locale_file);
        let definitions = extract_defined_keys(&locale_file)?;

        let scan = scan_files(&ScanOptions {
            root: &root_dir,
            source_root: Path::new(&config.source_root),
            extensions: &config.extensions,
            entry_files: &config.entry_files,
            ignores: &config.ignores,
        });
        tracing::debug!("Scanning {} source file(s)", scan.files.len());

        let policy = MatchPolicy::from_all_matches(config.all_matches_per_line);
        let references = extract_references(&scan.files, policy)?;

        Ok(Self {
            config,
            files: scan.files,
            skipped_count: scan.skipped_count,
            definitions,
            references,
            validation: OnceCell::new(),
        })
    }

    pub fn validation(&self) -> &ValidationResult {
        self.validation
            .get_or_init(|| validate(&self.definitions, &self.references))
    }
}
