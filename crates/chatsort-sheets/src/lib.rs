// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Sheets result sink adapter.
//!
//! Provides [`SheetsClient`], which authenticates with a service account
//! and appends classified conversation rows to a specific worksheet.

pub mod auth;
pub mod client;

pub use auth::ServiceAccountKey;
pub use client::SheetsClient;
