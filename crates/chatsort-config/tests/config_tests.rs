// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for layered config loading and validation.

use chatsort_config::{load_and_validate_str, ChatsortConfig, ConfigError};

#[test]
fn defaults_load_and_validate() {
    let config = load_and_validate_str("").expect("empty config should be valid");
    assert_eq!(config.runner.log_level, "info");
    assert_eq!(config.runner.window_hours, 24);
    assert_eq!(config.looker.look_id, "764");
    assert_eq!(config.openai.model, "gpt-4");
    assert!((config.openai.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.sheets.credentials_file, "gsheet_creds.json");
}

#[test]
fn taxonomy_defaults_match_shipped_labels() {
    let config = ChatsortConfig::default();
    assert_eq!(config.taxonomy.main_categories.len(), 6);
    assert_eq!(config.taxonomy.magicos_issues.len(), 16);
    assert_eq!(config.taxonomy.business_issues.len(), 11);
    assert!(config
        .taxonomy
        .main_categories
        .iter()
        .any(|c| c == "MagicOS"));
    assert!(config
        .taxonomy
        .business_issues
        .iter()
        .any(|c| c == "Gratis targeting"));
}

#[test]
fn toml_overrides_defaults() {
    let toml = r#"
[runner]
window_hours = 48
log_level = "debug"

[looker]
base_url = "https://bi.example.com:19999"
look_id = "42"

[openai]
api_key = "sk-test"
model = "gpt-4o"

[sheets]
spreadsheet_id = "sheet123"
worksheet_id = 7
"#;
    let config = load_and_validate_str(toml).unwrap();
    assert_eq!(config.runner.window_hours, 48);
    assert_eq!(config.runner.log_level, "debug");
    assert_eq!(config.looker.look_id, "42");
    assert_eq!(config.looker.base_url.as_deref(), Some("https://bi.example.com:19999"));
    assert_eq!(config.openai.model, "gpt-4o");
    assert_eq!(config.sheets.worksheet_id, 7);
}

#[test]
fn unknown_key_is_rejected_with_suggestion() {
    let toml = r#"
[runner]
windw_hours = 48
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "windw_hours" && suggestion.as_deref() == Some("window_hours")
    )));
}

#[test]
fn invalid_window_fails_validation() {
    let toml = r#"
[runner]
window_hours = 0
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("window_hours")
    )));
}

#[test]
fn taxonomy_lists_can_be_replaced() {
    let toml = r#"
[taxonomy]
main_categories = ["Billing", "Technical"]
"#;
    let config = load_and_validate_str(toml).unwrap();
    assert_eq!(config.taxonomy.main_categories, vec!["Billing", "Technical"]);
    // Untouched lists keep their defaults.
    assert_eq!(config.taxonomy.business_issues.len(), 11);
}

#[test]
fn env_vars_override_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "chatsort.toml",
            r#"
[openai]
model = "gpt-4"
"#,
        )?;
        jail.set_env("CHATSORT_OPENAI_MODEL", "gpt-4o-mini");
        jail.set_env("CHATSORT_OPENAI_API_KEY", "sk-env");

        let config = chatsort_config::load_config().expect("config should load");
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-env"));
        Ok(())
    });
}
