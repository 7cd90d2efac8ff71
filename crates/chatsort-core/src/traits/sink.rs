// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result sink trait for spreadsheet backends.

use async_trait::async_trait;

use crate::error::ChatsortError;
use crate::types::SheetRow;

/// Adapter for the spreadsheet the classified rows are appended to.
///
/// Append failures are per-brand recoverable, but the driver treats a
/// successful append as a precondition for advancing the watermark.
#[async_trait]
pub trait ResultSink: Send + Sync + 'static {
    /// Appends `row` as the new last row of the configured worksheet.
    async fn append(&self, row: &SheetRow) -> Result<(), ChatsortError>;
}
