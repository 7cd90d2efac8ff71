// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat Completions API request/response types.

use serde::{Deserialize, Serialize};

/// A request to the Chat Completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g., "gpt-4").
    pub model: String,

    /// Ordered role/content message pairs.
    pub messages: Vec<ChatCompletionMessage>,

    /// Sampling temperature.
    pub temperature: f32,
}

/// A single message in the chat-completion format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,

    /// Message text.
    pub content: String,
}

/// A full response from the Chat Completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices; the first one carries the reply.
    pub choices: Vec<ChatChoice>,

    /// Token usage statistics.
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// One completion choice within a response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The assistant message for this choice.
    pub message: ChatCompletionMessage,

    /// Reason the generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics from the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatUsage {
    /// Number of prompt tokens consumed.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Number of completion tokens generated.
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens for the exchange.
    #[serde(default)]
    pub total_tokens: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Error type identifier.
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Human-readable error message.
    pub message: String,
}
