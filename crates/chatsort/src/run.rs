// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `chatsort run` subcommand: wires the configured adapters together
//! and executes one triage pass.

use std::path::Path;

use chatsort_config::{ChatsortConfig, RunnerConfig};
use chatsort_core::ChatsortError;
use chatsort_looker::LookerClient;
use chatsort_openai::OpenAiClassifier;
use chatsort_runner::{RunDriver, WatermarkStore};
use chatsort_sheets::{ServiceAccountKey, SheetsClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs one pass with the window anchored at the current local time.
pub async fn execute(config: &ChatsortConfig) -> Result<(), ChatsortError> {
    init_logging(&config.runner)?;

    let base_url = require(config.looker.base_url.as_deref(), "looker.base_url")?;
    let client_id = require(config.looker.client_id.as_deref(), "looker.client_id")?;
    let client_secret = require(config.looker.client_secret.as_deref(), "looker.client_secret")?;
    let api_key = require(config.openai.api_key.as_deref(), "openai.api_key")?;
    let spreadsheet_id = require(config.sheets.spreadsheet_id.as_deref(), "sheets.spreadsheet_id")?;

    let source = LookerClient::new(
        base_url.to_string(),
        client_id.to_string(),
        client_secret.to_string(),
    )?;
    let classifier = OpenAiClassifier::new(api_key, &config.openai, &config.taxonomy)?;
    let key = ServiceAccountKey::load(Path::new(&config.sheets.credentials_file))?;
    let sink = SheetsClient::new(key, spreadsheet_id.to_string(), config.sheets.worksheet_id)?;
    let store = WatermarkStore::new(&config.runner.watermark_path);

    let driver = RunDriver::new(
        source,
        classifier,
        sink,
        store,
        config.looker.look_id.clone(),
        config.runner.window_hours,
        config.taxonomy.main_categories.clone(),
    );

    let now = chrono::Local::now().naive_local();
    info!(window_hours = config.runner.window_hours, "starting triage pass");
    let summary = driver.run(now).await?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        "triage pass finished"
    );
    Ok(())
}

/// Installs the file-backed tracing subscriber.
///
/// Operational status goes to the configured log file, not stdout; the
/// `config` subcommand keeps stdout clean for its TOML output.
fn init_logging(runner: &RunnerConfig) -> Result<(), ChatsortError> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&runner.log_file)
        .map_err(|e| {
            ChatsortError::Config(format!("cannot open log file {}: {e}", runner.log_file))
        })?;

    let filter = EnvFilter::try_new(&runner.log_level)
        .map_err(|e| ChatsortError::Config(format!("invalid runner.log_level: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn require<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, ChatsortError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ChatsortError::Config(format!(
            "{key} must be set (config file or CHATSORT_{} env var)",
            key.replace('.', "_").to_uppercase()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_blank_values() {
        assert!(require(None, "looker.base_url").is_err());
        assert!(require(Some("   "), "looker.base_url").is_err());
        assert_eq!(require(Some("x"), "looker.base_url").unwrap(), "x");
    }

    #[test]
    fn require_error_names_the_env_override() {
        let err = require(None, "openai.api_key").unwrap_err();
        assert!(err.to_string().contains("CHATSORT_OPENAI_API_KEY"), "got: {err}");
    }
}
