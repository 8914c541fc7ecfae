use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, MockServer, stderr, stdout};

const LOCALE: &str = "local L = Addon.Locale\n\
                      L[\"SELL\"] = \"Sell\"\n\
                      \n\
                      -- Destroying\n\
                      L[\"DESTROY\"] = \"Destroy\"\n";

#[test]
fn test_upload_requires_api_key() -> Result<()> {
    let test = CliTest::with_file("locales/enUS.lua", LOCALE)?;

    let output = test
        .upload_command()
        .args(["--project-id", "413260"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Missing API key"));

    Ok(())
}

#[test]
fn test_upload_requires_project_id() -> Result<()> {
    let test = CliTest::with_file("locales/enUS.lua", LOCALE)?;

    let output = test.upload_command().env("CF_API_KEY", "secret").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Missing project id"));

    Ok(())
}

#[test]
fn test_upload_dry_run() -> Result<()> {
    let test = CliTest::with_file("locales/enUS.lua", LOCALE)?;

    let output = test.upload_command().arg("--dry-run").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Would upload 2 entries:\n  \
           L[\"SELL\"] = \"Sell\"\n  \
           L[\"DESTROY\"] = \"Destroy\"\n\
         Run without --dry-run to upload.\n"
    );

    Ok(())
}

#[test]
fn test_upload_missing_locale_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.upload_command().arg("--dry-run").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read locale file"));

    Ok(())
}

fn config_for(server_url: &str) -> String {
    format!(
        r#"{{ "upload": {{ "projectId": "413260", "endpoint": "{}/api/projects/{{projectId}}/localization" }} }}"#,
        server_url
    )
}

#[test]
fn test_upload_posts_form() -> Result<()> {
    let server = MockServer::start(vec![(200, "")])?;
    let test = CliTest::with_file("locales/enUS.lua", LOCALE)?;
    test.write_file(".loclintrc.json", &config_for(&server.url()))?;

    let output = test.upload_command().env("CF_API_KEY", "secret").output()?;
    let requests = server.requests();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Uploaded 2 entries:"));

    assert_eq!(requests.len(), 1);
    let import = &requests[0];
    assert_eq!(import.method, "POST");
    assert_eq!(
        import.target,
        "/api/projects/413260/localization/import?token=secret"
    );
    assert_eq!(
        import.form_field("metadata").as_deref(),
        Some(r#"{"language":"enUS","missing-phrase-handling":"DeletePhrase"}"#)
    );
    assert_eq!(
        import.form_field("localizations").as_deref(),
        Some("L[\"SELL\"] = \"Sell\"\nL[\"DESTROY\"] = \"Destroy\"")
    );

    Ok(())
}

#[test]
fn test_upload_sync_imports_unchanged_entries_first() -> Result<()> {
    let exported = "L[\"SELL\"] = \"Sell\"\n\
                    -- stale\n\
                    \n\
                    L[\"DESTROY\"] = \"Old\"\n\
                    L[\"STALE\"] = \"x\"\n";
    let server = MockServer::start(vec![(200, exported), (200, ""), (200, "")])?;
    let test = CliTest::with_file("locales/enUS.lua", LOCALE)?;
    test.write_file(".loclintrc.json", &config_for(&server.url()))?;

    let output = test
        .upload_command()
        .arg("--sync")
        .env("CF_API_KEY", "secret")
        .output()?;
    let requests = server.requests();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Uploaded 1 unchanged entry to delete stale phrases."));
    assert!(out.contains("Uploaded 2 entries:"));

    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].target,
        "/api/projects/413260/localization/export?token=secret"
    );

    assert_eq!(requests[1].method, "POST");
    assert_eq!(
        requests[1].form_field("localizations").as_deref(),
        Some("L[\"SELL\"] = \"Sell\"")
    );

    assert_eq!(requests[2].method, "POST");
    assert_eq!(
        requests[2].form_field("localizations").as_deref(),
        Some("L[\"SELL\"] = \"Sell\"\nL[\"DESTROY\"] = \"Destroy\"")
    );

    Ok(())
}

#[test]
fn test_upload_failure_reports_response_body() -> Result<()> {
    let server = MockServer::start(vec![(500, "project not found")])?;
    let test = CliTest::with_file("locales/enUS.lua", LOCALE)?;
    test.write_file(".loclintrc.json", &config_for(&server.url()))?;

    let output = test.upload_command().env("CF_API_KEY", "secret").output()?;
    server.requests();

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Import failed (500"));
    assert!(err.contains("project not found"));
    assert!(!err.contains("secret"));

    Ok(())
}

#[test]
fn test_upload_connection_error_hides_token() -> Result<()> {
    let test = CliTest::with_file("locales/enUS.lua", LOCALE)?;
    test.write_file(
        ".loclintrc.json",
        r#"{ "upload": { "projectId": "1", "endpoint": "http://127.0.0.1:1/api" } }"#,
    )?;

    let output = test
        .upload_command()
        .env("CF_API_KEY", "SUPERSECRET")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Import request failed"));
    assert!(!err.contains("SUPERSECRET"));

    Ok(())
}
