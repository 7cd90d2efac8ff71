// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI chat-completion classifier adapter.
//!
//! Provides [`OpenAiClassifier`], which sends a brand conversation
//! transcript together with the fixed taxonomy instruction to a
//! chat-completion endpoint and returns the raw reply text.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::OpenAiClassifier;
pub use prompt::build_system_prompt;
