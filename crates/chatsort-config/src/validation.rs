// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as positive window sizes and sane sampling temperatures.

use crate::diagnostic::ConfigError;
use crate::model::ChatsortConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ChatsortConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.runner.window_hours < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "runner.window_hours must be at least 1, got {}",
                config.runner.window_hours
            ),
        });
    }

    if config.runner.log_file.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "runner.log_file must not be empty".to_string(),
        });
    }

    if config.runner.watermark_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "runner.watermark_path must not be empty".to_string(),
        });
    }

    if config.looker.look_id.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "looker.look_id must not be empty".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.openai.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "openai.temperature must be within 0.0..=2.0, got {}",
                config.openai.temperature
            ),
        });
    }

    // The classifier prompt interpolates all three lists; an empty list
    // would leave the model without a closed vocabulary to pick from.
    if config.taxonomy.main_categories.is_empty() {
        errors.push(ConfigError::Validation {
            message: "taxonomy.main_categories must not be empty".to_string(),
        });
    }

    if config.taxonomy.magicos_issues.is_empty() {
        errors.push(ConfigError::Validation {
            message: "taxonomy.magicos_issues must not be empty".to_string(),
        });
    }

    if config.taxonomy.business_issues.is_empty() {
        errors.push(ConfigError::Validation {
            message: "taxonomy.business_issues must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = ChatsortConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_window_fails_validation() {
        let mut config = ChatsortConfig::default();
        config.runner.window_hours = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("window_hours"))));
    }

    #[test]
    fn out_of_range_temperature_fails_validation() {
        let mut config = ChatsortConfig::default();
        config.openai.temperature = 3.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("temperature"))));
    }

    #[test]
    fn empty_taxonomy_fails_validation() {
        let mut config = ChatsortConfig::default();
        config.taxonomy.main_categories.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("main_categories"))));
    }

    #[test]
    fn multiple_errors_are_collected() {
        let mut config = ChatsortConfig::default();
        config.runner.window_hours = -1;
        config.runner.log_file = " ".to_string();
        config.openai.temperature = -0.1;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 3, "expected all errors, got {}", errors.len());
    }
}
