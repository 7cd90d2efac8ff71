// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Looker BI query source adapter.
//!
//! Provides [`LookerClient`], which authenticates against a Looker instance
//! and runs a saved Look, returning its result set as loosely-typed records.

pub mod client;

pub use client::LookerClient;

/// Dotted field identifiers used by the chat report Look.
///
/// These are source-specific column names; the grouper reads them from each
/// [`chatsort_core::RawRecord`] with explicit defaults.
pub mod fields {
    /// Message creation time, formatted `YYYY-MM-DD HH:MM:SS`.
    pub const MESSAGE_CREATED_AT: &str = "brand_chats_core.message_created_at_time";
    /// Brand display name.
    pub const BRAND_NAME: &str = "brands_core.name";
    /// Message body.
    pub const MESSAGE_CONTENT: &str = "brand_chats_core.content";
}
