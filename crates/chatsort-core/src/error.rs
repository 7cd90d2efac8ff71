// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Chatsort triage pipeline.

use thiserror::Error;

/// The primary error type used across all Chatsort adapters and the run driver.
#[derive(Debug, Error)]
pub enum ChatsortError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Query source errors (BI authentication failure, report fetch failure).
    /// Fatal for the run: nothing can be processed without the source data.
    #[error("query source error: {message}")]
    Source {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Classification service errors (API failure, quota, malformed response).
    /// Per-brand recoverable: the affected brand is skipped for this run.
    #[error("classifier error: {message}")]
    Classifier {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Result sink errors (spreadsheet auth or append failure).
    /// Per-brand recoverable: the watermark must not advance.
    #[error("sink error: {message}")]
    Sink {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Watermark storage errors (file read/write, serialization).
    #[error("watermark storage error: {message}")]
    Storage {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
