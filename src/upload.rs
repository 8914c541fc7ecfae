//! Localization upload to the translation platform.
//!
//! The platform imports phrases as raw `L["KEY"] = "value"` lines and can
//! export the phrases it currently holds in the same format.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use serde::Serialize;

use crate::{config::UploadConfig, core::parsers::locale::definition_lines};

/// Explicit settings for one upload run.
///
/// Built from config and CLI flags, and validated before any request is made.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Base URL of the localization API (without `/import` or `/export`).
    pub endpoint: String,
    pub api_key: String,
    pub language: String,
    pub missing_phrase_handling: String,
}

impl UploadSettings {
    /// Merge config with CLI values.
    ///
    /// Fails if the API key or project id is absent.
    pub fn resolve(
        config: &UploadConfig,
        api_key: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<Self> {
        let api_key = match api_key.map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!("Missing API key: set CF_API_KEY or pass --api-key"),
        };
        let Some(project_id) = project_id.or(config.project_id.as_deref()) else {
            bail!("Missing project id: set 'upload.projectId' in the config or pass --project-id");
        };

        Ok(Self {
            endpoint: config.endpoint_for(project_id),
            api_key,
            language: config.language.clone(),
            missing_phrase_handling: config.missing_phrase_handling.clone(),
        })
    }

    fn import_url(&self) -> String {
        format!("{}/import?token={}", self.endpoint, self.api_key)
    }

    fn export_url(&self) -> String {
        format!("{}/export?token={}", self.endpoint, self.api_key)
    }
}

#[derive(Serialize)]
struct ImportMetadata<'a> {
    language: &'a str,
    #[serde(rename = "missing-phrase-handling")]
    missing_phrase_handling: &'a str,
}

/// Form body of an import request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ImportPayload {
    /// JSON-encoded import options.
    pub metadata: String,
    /// Newline-joined definition lines.
    pub localizations: String,
}

impl ImportPayload {
    pub fn new(settings: &UploadSettings, entries: &[String]) -> Result<Self> {
        let metadata = serde_json::to_string(&ImportMetadata {
            language: &settings.language,
            missing_phrase_handling: &settings.missing_phrase_handling,
        })
        .context("Failed to encode import metadata")?;

        Ok(Self {
            metadata,
            localizations: entries.join("\n"),
        })
    }
}

/// Local entries whose exact line is also present remotely.
pub fn unchanged_entries(local: &[String], remote: &[String]) -> Vec<String> {
    local
        .iter()
        .filter(|entry| remote.contains(entry))
        .cloned()
        .collect()
}

/// Blocking client for the localization import/export API.
pub struct LocalizationClient {
    client: Client,
    settings: UploadSettings,
}

impl LocalizationClient {
    pub fn new(settings: UploadSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, settings })
    }

    /// Phrases currently held by the platform.
    ///
    /// Request URLs carry the API token, so they are stripped from errors.
    pub fn export(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.settings.export_url())
            .send()
            .map_err(reqwest::Error::without_url)
            .context("Export request failed")?;

        let status = response.status();
        let body = response
            .text()
            .map_err(reqwest::Error::without_url)
            .context("Failed to read export response")?;
        if !status.is_success() {
            bail!("Export failed ({}): {}", status, body);
        }
        Ok(definition_lines(&body))
    }

    /// Import `entries`. Phrases missing from `entries` are handled per the
    /// configured missing-phrase handling.
    pub fn import(&self, entries: &[String]) -> Result<()> {
        let payload = ImportPayload::new(&self.settings, entries)?;
        let response = self
            .client
            .post(self.settings.import_url())
            .form(&payload)
            .send()
            .map_err(reqwest::Error::without_url)
            .context("Import request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("Import failed ({}): {}", status, body);
        }
        tracing::debug!("Imported {} entries", entries.len());
        Ok(())
    }
}
