// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Chat Completions API.
//!
//! Provides [`OpenAiClassifier`] which handles request construction,
//! authentication, and transient error retry. Classification failures are
//! per-brand recoverable: the run driver skips the brand and leaves its
//! watermark untouched.

use std::time::Duration;

use async_trait::async_trait;
use chatsort_config::{OpenAiConfig, TaxonomyConfig};
use chatsort_core::{ChatsortError, ConversationClassifier};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::prompt::{build_system_prompt, USER_PROMPT_PREFIX};
use crate::types::{ApiErrorResponse, ChatCompletionMessage, ChatCompletionRequest, ChatCompletionResponse};

/// Endpoint URL for the Chat Completions API.
const API_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completion classifier client.
///
/// Builds the taxonomy instruction once at construction and sends a
/// two-message exchange (system instruction + user transcript) per brand
/// at the configured low temperature. Retries transient errors
/// (429, 500, 503) once after a 1-second delay.
#[derive(Debug, Clone)]
pub struct OpenAiClassifier {
    client: reqwest::Client,
    model: String,
    temperature: f32,
    system_prompt: String,
    max_retries: u32,
    base_url: String,
}

impl OpenAiClassifier {
    /// Creates a new classifier client.
    ///
    /// # Arguments
    /// * `api_key` - API key for bearer authentication
    /// * `config` - model and temperature settings
    /// * `taxonomy` - the fixed category lists interpolated into the prompt
    pub fn new(
        api_key: &str,
        config: &OpenAiConfig,
        taxonomy: &TaxonomyConfig,
    ) -> Result<Self, ChatsortError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {api_key}");
        headers.insert(
            "authorization",
            HeaderValue::from_str(&bearer).map_err(|e| {
                ChatsortError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ChatsortError::Classifier {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            system_prompt: build_system_prompt(taxonomy),
            max_retries: 1,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the endpoint URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

#[async_trait]
impl ConversationClassifier for OpenAiClassifier {
    async fn classify(&self, transcript: &str) -> Result<String, ChatsortError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatCompletionMessage {
                    role: "system".to_string(),
                    content: self.system_prompt.clone(),
                },
                ChatCompletionMessage {
                    role: "user".to_string(),
                    content: format!("{USER_PROMPT_PREFIX}{transcript}"),
                },
            ],
            temperature: self.temperature,
        };

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying classification request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(&self.base_url)
                .json(&request)
                .send()
                .await
                .map_err(|e| ChatsortError::Classifier {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "classification response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| ChatsortError::Classifier {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let completion: ChatCompletionResponse = serde_json::from_str(&body)
                    .map_err(|e| ChatsortError::Classifier {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                let reply = completion
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .ok_or_else(|| ChatsortError::Classifier {
                        message: "API response contained no choices".to_string(),
                        source: None,
                    })?;
                return Ok(reply.trim().to_string());
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(ChatsortError::Classifier {
                    message: format!("API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let error_msg = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "OpenAI API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(ChatsortError::Classifier {
                message: error_msg,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| ChatsortError::Classifier {
            message: "classification request failed after retries".into(),
            source: None,
        }))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
