// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Chatsort triage pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Chatsort configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to the values
/// the pipeline shipped with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatsortConfig {
    /// Run driver settings (logging, window, watermark file).
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Looker BI source settings.
    #[serde(default)]
    pub looker: LookerConfig,

    /// OpenAI classification service settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Google Sheets result sink settings.
    #[serde(default)]
    pub sheets: SheetsConfig,

    /// Fixed category taxonomies interpolated into the classifier prompt.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

/// Run driver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path of the log file all operational status is written to.
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Trailing lookback window, in hours, measured from run start.
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,

    /// Path of the JSON file holding per-brand last-processed timestamps.
    #[serde(default = "default_watermark_path")]
    pub watermark_path: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: default_log_file(),
            window_hours: default_window_hours(),
            watermark_path: default_watermark_path(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "chatsort.log".to_string()
}

fn default_window_hours() -> i64 {
    24
}

fn default_watermark_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("chatsort").join("watermarks.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("watermarks.json"))
        .to_string_lossy()
        .into_owned()
}

/// Looker BI source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LookerConfig {
    /// Base URL of the Looker instance (e.g., `https://company.looker.com:19999`).
    /// `None` disables the source; the run command requires it.
    #[serde(default)]
    pub base_url: Option<String>,

    /// API client id. `None` requires environment variable.
    #[serde(default)]
    pub client_id: Option<String>,

    /// API client secret. `None` requires environment variable.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Id of the saved Look holding the chat report.
    #[serde(default = "default_look_id")]
    pub look_id: String,
}

impl Default for LookerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            client_id: None,
            client_secret: None,
            look_id: default_look_id(),
        }
    }
}

fn default_look_id() -> String {
    "764".to_string()
}

/// OpenAI classification service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// OpenAI API key. `None` requires environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use for classification requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature. Kept low for reproducible classifications.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

/// Google Sheets result sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SheetsConfig {
    /// Id of the shared spreadsheet rows are appended to.
    #[serde(default)]
    pub spreadsheet_id: Option<String>,

    /// Numeric worksheet/tab id within the spreadsheet.
    #[serde(default)]
    pub worksheet_id: u64,

    /// Path of the service account credentials JSON file.
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            worksheet_id: 0,
            credentials_file: default_credentials_file(),
        }
    }
}

fn default_credentials_file() -> String {
    "gsheet_creds.json".to_string()
}

/// The three fixed, ordered category taxonomies.
///
/// These are static configuration loaded once at process start and
/// interpolated verbatim into the classification instruction; they never
/// change at runtime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyConfig {
    /// Main conversation categories (exactly one is chosen per conversation).
    #[serde(default = "default_main_categories")]
    pub main_categories: Vec<String>,

    /// MagicOS-specific issue labels ("N/A" when none apply).
    #[serde(default = "default_magicos_issues")]
    pub magicos_issues: Vec<String>,

    /// Business-specific issue labels ("N/A" when none apply).
    #[serde(default = "default_business_issues")]
    pub business_issues: Vec<String>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            main_categories: default_main_categories(),
            magicos_issues: default_magicos_issues(),
            business_issues: default_business_issues(),
        }
    }
}

fn default_main_categories() -> Vec<String> {
    [
        "Doing Business with Flip",
        "MagicOS",
        "Add new fields to MagicOS",
        "Customer Driven",
        "Integrations",
        "Wholesale/fulfillment/beauty",
    ]
    .map(String::from)
    .to_vec()
}

fn default_magicos_issues() -> Vec<String> {
    [
        "How to add products to Fip",
        "Adding Gratis",
        "requested new products to be mapped.",
        "How to update items on Flip",
        "How to get the money out",
        "Incorrect/incosistent numbers - bugs",
        "How does MagicOS work",
        "Adding more users",
        "Pricing Inventory not updating",
        "How do I download a video",
        "MagicOS Language",
        "integration / Self-onboarding",
        "Discounts",
        "Connecting bank account",
        "OOS on Flip",
        "Financial reporting",
    ]
    .map(String::from)
    .to_vec()
}

fn default_business_issues() -> Vec<String> {
    [
        "Brand Official Creator Account",
        "Orders",
        "Gratis targeting",
        "Payment Terms",
        "ADS on Flip",
        "Shipping",
        "Returns",
        "Cancelling orders",
        "Content Policy",
        "Gift Feature",
        "Brand Social Profile",
    ]
    .map(String::from)
    .to_vec()
}
