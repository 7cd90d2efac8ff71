// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Looker API.
//!
//! Handles API credential login and running a saved Look as JSON. Query
//! source failures are fatal for a run, so errors here carry enough context
//! for the operator log.

use std::time::Duration;

use async_trait::async_trait;
use chatsort_core::{ChatsortError, QuerySource, RawRecord};
use serde::Deserialize;
use tracing::{debug, warn};

/// Result of a `POST /api/4.0/login` call.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Error body returned by the Looker API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for the Looker API.
///
/// Authenticates with API3 credentials per run (a single run comfortably
/// fits one token lifetime) and retries transient errors (429, 500, 503)
/// once before giving up.
#[derive(Debug, Clone)]
pub struct LookerClient {
    client: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    max_retries: u32,
}

impl LookerClient {
    /// Creates a new Looker API client.
    ///
    /// # Arguments
    /// * `base_url` - Looker instance base URL (no trailing slash)
    /// * `client_id` / `client_secret` - API3 credentials
    pub fn new(
        base_url: String,
        client_id: String,
        client_secret: String,
    ) -> Result<Self, ChatsortError> {
        if base_url.trim().is_empty() {
            return Err(ChatsortError::Config(
                "looker.base_url must be set to run a report".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ChatsortError::Source {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
            max_retries: 1,
        })
    }

    /// Logs in with API3 credentials and returns a bearer token.
    async fn login(&self) -> Result<String, ChatsortError> {
        let url = format!("{}/api/4.0/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ChatsortError::Source {
                message: format!("login request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatsortError::Source {
                message: format!("login failed with {status}: {}", api_error_message(&body)),
                source: None,
            });
        }

        let login: LoginResponse =
            response.json().await.map_err(|e| ChatsortError::Source {
                message: format!("failed to parse login response: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!("looker login succeeded");
        Ok(login.access_token)
    }
}

#[async_trait]
impl QuerySource for LookerClient {
    /// Runs the saved Look and returns its rows as raw records.
    ///
    /// On transient errors (429, 500, 503), retries once after a 1-second
    /// delay. Any final failure is returned to the caller, which treats it
    /// as fatal for the run.
    async fn run_report(&self, report_id: &str) -> Result<Vec<RawRecord>, ChatsortError> {
        let token = self.login().await?;
        let url = format!("{}/api/4.0/looks/{report_id}/run/json", self.base_url);

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying look run after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .get(&url)
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| ChatsortError::Source {
                    message: format!("look run request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, report_id, "look run response received");

            if status.is_success() {
                let records: Vec<RawRecord> =
                    response.json().await.map_err(|e| ChatsortError::Source {
                        message: format!("failed to parse look result: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                debug!(count = records.len(), report_id, "look result fetched");
                return Ok(records);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(ChatsortError::Source {
                    message: format!("Looker API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(ChatsortError::Source {
                message: format!(
                    "look run failed with {status}: {}",
                    api_error_message(&body)
                ),
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| ChatsortError::Source {
            message: "look run failed after retries".into(),
            source: None,
        }))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}

/// Extract the API error message from a response body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string())
}
