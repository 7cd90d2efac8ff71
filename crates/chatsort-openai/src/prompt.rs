// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System instruction template for conversation classification.
//!
//! The template describes the task and the required five-field JSON reply
//! shape; the three taxonomy lists are interpolated verbatim as JSON array
//! literals so the model picks from a closed vocabulary.

use chatsort_config::TaxonomyConfig;

/// Classification instruction with `{placeholders}` for the taxonomy lists.
const SYSTEM_PROMPT: &str = r#"You are an AI assistant that categorizes customer support chats for a platform called Flip with a CRM/CMS system called MagicOS.
Your task is to analyze the content of customer chat conversations and categorize them appropriately.

For each conversation, provide the following:

1. PROBLEM: In one sentence, what was the customer's problem or inquiry?

2. MAIN_CATEGORY: Choose ONE of the following categories that best matches the conversation:
{main_categories}

3. SOLUTION: In one sentence, what was or should be the solution to the customer's problem?

4. MAGICOS_ISSUE: If applicable, choose ONE of the following specific MagicOS issues. If none apply, respond with "N/A":
{magicos_issues}

5. BUSINESS_ISSUE: If applicable, choose ONE of the following specific business issues. If none apply, respond with "N/A":
{business_issues}

Respond in JSON format with the following structure:
{
  "problem": "Brief description of the problem",
  "main_category": "Selected Main Category",
  "solution": "Brief suggested solution",
  "magicos_issue": "Selected MagicOS Issue or leave blank",
  "business_issue": "Selected Business Issue or leave blank"
}"#;

/// Prefix for the user message carrying the transcript.
pub const USER_PROMPT_PREFIX: &str =
    "Please analyze the following conversation and provide categorization:\n\n";

/// Build the system instruction by interpolating the taxonomy lists.
pub fn build_system_prompt(taxonomy: &TaxonomyConfig) -> String {
    SYSTEM_PROMPT
        .replace("{main_categories}", &render_list(&taxonomy.main_categories))
        .replace("{magicos_issues}", &render_list(&taxonomy.magicos_issues))
        .replace("{business_issues}", &render_list(&taxonomy.business_issues))
}

/// Render a taxonomy list as its literal JSON array representation.
fn render_list(labels: &[String]) -> String {
    // Taxonomy labels are plain strings; serialization cannot fail.
    serde_json::to_string(labels).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_interpolates_all_three_lists() {
        let taxonomy = TaxonomyConfig::default();
        let prompt = build_system_prompt(&taxonomy);

        for label in &taxonomy.main_categories {
            assert!(prompt.contains(label.as_str()), "missing {label}");
        }
        assert!(prompt.contains("Connecting bank account"));
        assert!(prompt.contains("Gratis targeting"));
        // No placeholder left behind.
        assert!(!prompt.contains("{main_categories}"));
        assert!(!prompt.contains("{magicos_issues}"));
        assert!(!prompt.contains("{business_issues}"));
    }

    #[test]
    fn prompt_describes_reply_shape() {
        let prompt = build_system_prompt(&TaxonomyConfig::default());
        assert!(prompt.contains("\"problem\""));
        assert!(prompt.contains("\"main_category\""));
        assert!(prompt.contains("\"solution\""));
        assert!(prompt.contains("\"magicos_issue\""));
        assert!(prompt.contains("\"business_issue\""));
    }

    #[test]
    fn lists_render_as_json_arrays() {
        let taxonomy = TaxonomyConfig {
            main_categories: vec!["A".into(), "B".into()],
            ..TaxonomyConfig::default()
        };
        let prompt = build_system_prompt(&taxonomy);
        assert!(prompt.contains(r#"["A","B"]"#));
    }
}
