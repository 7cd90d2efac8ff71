// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the three external services the run
//! driver talks to. All traits use `#[async_trait]` for dynamic dispatch.

pub mod classifier;
pub mod sink;
pub mod source;

pub use classifier::ConversationClassifier;
pub use sink::ResultSink;
pub use source::QuerySource;
