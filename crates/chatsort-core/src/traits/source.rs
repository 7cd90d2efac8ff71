// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query source adapter trait for BI report backends.

use async_trait::async_trait;

use crate::error::ChatsortError;
use crate::types::RawRecord;

/// Adapter for the analytics/BI query source.
///
/// Returns the full, unfiltered result set for a report as flat key-value
/// records; windowing and grouping happen downstream. Any failure here is
/// fatal for the run.
#[async_trait]
pub trait QuerySource: Send + Sync + 'static {
    /// Authenticates against the BI service and runs the report.
    async fn run_report(&self, report_id: &str) -> Result<Vec<RawRecord>, ChatsortError>;
}
