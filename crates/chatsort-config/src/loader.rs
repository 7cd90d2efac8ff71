// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./chatsort.toml` > `~/.config/chatsort/chatsort.toml`
//! > `/etc/chatsort/chatsort.toml` with environment variable overrides via
//! `CHATSORT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ChatsortConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/chatsort/chatsort.toml` (system-wide)
/// 3. `~/.config/chatsort/chatsort.toml` (user XDG config)
/// 4. `./chatsort.toml` (local directory)
/// 5. `CHATSORT_*` environment variables
pub fn load_config() -> Result<ChatsortConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ChatsortConfig::default()))
        .merge(Toml::file("/etc/chatsort/chatsort.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("chatsort/chatsort.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("chatsort.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ChatsortConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ChatsortConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ChatsortConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ChatsortConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `CHATSORT_OPENAI_API_KEY` must map to
/// `openai.api_key`, not `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("CHATSORT_").map(|key| {
        // `key` is the env var name with prefix stripped, in its original
        // (typically uppercase) form; figment only lowercases keys after this
        // mapper runs, so normalize here for the section matching below.
        // Example: CHATSORT_OPENAI_API_KEY -> "openai_api_key"
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = key_str
            .replacen("runner_", "runner.", 1)
            .replacen("looker_", "looker.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("sheets_", "sheets.", 1)
            .replacen("taxonomy_", "taxonomy.", 1);
        mapped.into()
    })
}
