// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation classifier trait for chat-completion backends.

use async_trait::async_trait;

use crate::error::ChatsortError;

/// Adapter for the remote text-generation service that classifies one
/// brand conversation.
///
/// Implementations return the raw reply text; parsing it into a
/// [`crate::types::ClassificationResult`] is the run driver's job, so a
/// malformed reply and a failed call are handled by the same skip path.
#[async_trait]
pub trait ConversationClassifier: Send + Sync + 'static {
    /// Sends the conversation transcript for classification and returns
    /// the model's raw reply text.
    async fn classify(&self, transcript: &str) -> Result<String, ChatsortError>;
}
