use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".loclintrc.json";

/// Endpoint used when `upload.endpoint` is not set; `{projectId}` is substituted.
pub const DEFAULT_UPLOAD_ENDPOINT: &str =
    "https://wow.curseforge.com/api/projects/{projectId}/localization";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Canonical locale file holding the `L["KEY"] = "..."` definitions.
    #[serde(default = "default_locale_file")]
    pub locale_file: String,
    /// Directory scanned recursively for key references.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Files outside the source root that are scanned too (when present).
    #[serde(default = "default_entry_files")]
    pub entry_files: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub all_matches_per_line: bool,
    #[serde(default)]
    pub bindings: BindingsConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Game client flavor a key binding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Flavor {
    Classic,
    Retail,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingEntry {
    pub name: String,
    /// Lua statements run by the binding, one per line.
    pub lua: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Only emitted for this flavor; `None` means every flavor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingsConfig {
    #[serde(default = "default_bindings_output")]
    pub output: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub entries: Vec<BindingEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_missing_phrase_handling")]
    pub missing_phrase_handling: String,
}

fn default_locale_file() -> String {
    "locales/enUS.lua".to_string()
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["lua".to_string()]
}

fn default_entry_files() -> Vec<String> {
    vec!["Bindings.lua".to_string()]
}

fn default_bindings_output() -> String {
    "Bindings.xml".to_string()
}

fn default_language() -> String {
    "enUS".to_string()
}

fn default_missing_phrase_handling() -> String {
    "DeletePhrase".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_file: default_locale_file(),
            source_root: default_source_root(),
            extensions: default_extensions(),
            entry_files: default_entry_files(),
            ignores: Vec::new(),
            all_matches_per_line: false,
            bindings: BindingsConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            output: default_bindings_output(),
            category: String::new(),
            entries: Vec::new(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            endpoint: None,
            language: default_language(),
            missing_phrase_handling: default_missing_phrase_handling(),
        }
    }
}

impl UploadConfig {
    /// Base URL of the localization API for `project_id`.
    pub fn endpoint_for(&self, project_id: &str) -> String {
        self.endpoint
            .as_deref()
            .unwrap_or(DEFAULT_UPLOAD_ENDPOINT)
            .replace("{projectId}", project_id)
            .trim_end_matches('/')
            .to_string()
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or no
    /// source extension is configured.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            bail!("'extensions' must name at least one file extension");
        }

        for entry in &self.bindings.entries {
            if entry.name.is_empty() {
                bail!("Binding entries in 'bindings.entries' must have a name");
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
