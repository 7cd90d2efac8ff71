// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Chatsort workspace.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ChatsortError;

/// Wire format for all chat timestamps.
///
/// Fixed-precision calendar strings in this format compare correctly
/// lexicographically, which the watermark skip check relies on.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Channel label written into every sheet row.
pub const CHANNEL_LABEL: &str = "Chat";

/// A single support chat message, parsed from a raw query source record.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// When the message was created.
    pub timestamp: NaiveDateTime,
    /// Brand the chat belongs to.
    pub brand: String,
    /// Message body.
    pub content: String,
}

/// All in-window messages for one brand, ordered ascending by timestamp.
#[derive(Debug, Clone, Default)]
pub struct BrandConversation {
    /// Brand name (or the "Unknown Brand" default).
    pub brand: String,
    /// (timestamp, content) pairs, chronological after grouping.
    pub messages: Vec<(NaiveDateTime, String)>,
}

impl BrandConversation {
    /// Creates an empty conversation for a brand.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            messages: Vec::new(),
        }
    }

    /// Timestamp of the last message, or `None` for an empty conversation.
    pub fn latest_timestamp(&self) -> Option<NaiveDateTime> {
        self.messages.last().map(|(ts, _)| *ts)
    }

    /// Renders the conversation as `"<timestamp>: <content>"` lines,
    /// one per message, in chronological order.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|(ts, content)| format!("{}: {content}", ts.format(TIMESTAMP_FORMAT)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A raw record from the query source: a flat JSON object with
/// source-specific dotted field names.
///
/// Field access is explicit and best-effort; callers decide the default
/// applied when a field is absent or not a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub serde_json::Map<String, serde_json::Value>);

impl RawRecord {
    /// Returns the string value of `key`, or `None` if absent or non-string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Returns the string value of `key`, or `default` when it is missing.
    ///
    /// The caller-supplied default is the documented "default applied"
    /// behavior for loosely-typed source records.
    pub fn str_field_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.str_field(key).unwrap_or(default)
    }
}

/// The structured classification of one brand conversation.
///
/// Parsed from the model's JSON reply. Any field the model omits defaults
/// to an empty string; anything that is not a JSON object of this shape
/// is a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// One-sentence statement of the customer's problem.
    #[serde(default)]
    pub problem: String,
    /// One label from the main category taxonomy.
    #[serde(default)]
    pub main_category: String,
    /// One-sentence actual or suggested solution.
    #[serde(default)]
    pub solution: String,
    /// One label from the MagicOS issue taxonomy, or "N/A"/blank.
    #[serde(default)]
    pub magicos_issue: String,
    /// One label from the business issue taxonomy, or "N/A"/blank.
    #[serde(default)]
    pub business_issue: String,
}

impl ClassificationResult {
    /// Parses a raw model reply into a classification result.
    ///
    /// The reply is untrusted: models wrap JSON in markdown code fences or
    /// surround it with prose, so the outermost `{...}` object is located
    /// first and then parsed strictly.
    pub fn from_reply(reply: &str) -> Result<Self, ChatsortError> {
        let trimmed = reply.trim();
        let json_str = match (trimmed.find('{'), trimmed.rfind('}')) {
            (Some(start), Some(end)) if start < end => &trimmed[start..=end],
            _ => trimmed,
        };

        serde_json::from_str(json_str).map_err(|e| ChatsortError::Classifier {
            message: format!("failed to parse classification reply as JSON: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

/// The fixed-order 10-cell row appended to the result sheet.
///
/// Layout: `[latest_ts, "", "", brand, "Chat", problem, main_category,
/// solution, magicos_issue, business_issue]`. The two blank cells are
/// placeholder columns reserved for manual review notes.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub cells: Vec<String>,
}

impl SheetRow {
    /// Builds the row for one classified conversation.
    pub fn new(latest_timestamp: &str, brand: &str, result: &ClassificationResult) -> Self {
        Self {
            cells: vec![
                latest_timestamp.to_string(),
                String::new(),
                String::new(),
                brand.to_string(),
                CHANNEL_LABEL.to_string(),
                result.problem.clone(),
                result.main_category.clone(),
                result.solution.clone(),
                result.magicos_issue.clone(),
                result.business_issue.clone(),
            ],
        }
    }
}
