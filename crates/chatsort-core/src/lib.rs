// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Chatsort support-chat triage pipeline.
//!
//! Provides the error type, the domain types shared across the workspace,
//! and the adapter traits the run driver is wired against.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ChatsortError;
pub use types::{
    BrandConversation, ChatMessage, ClassificationResult, RawRecord, SheetRow,
    CHANNEL_LABEL, TIMESTAMP_FORMAT,
};

pub use traits::{ConversationClassifier, QuerySource, ResultSink};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chatsort_error_has_all_variants() {
        // Verify all 6 error variants exist and can be constructed.
        let _config = ChatsortError::Config("test".into());
        let _source = ChatsortError::Source {
            message: "test".into(),
            source: None,
        };
        let _classifier = ChatsortError::Classifier {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _sink = ChatsortError::Sink {
            message: "test".into(),
            source: None,
        };
        let _storage = ChatsortError::Storage {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _internal = ChatsortError::Internal("test".into());
    }

    #[test]
    fn all_adapter_traits_are_exported() {
        // Compile-time check that the three adapter traits are accessible
        // through the public API.
        fn _assert_query_source<T: QuerySource>() {}
        fn _assert_classifier<T: ConversationClassifier>() {}
        fn _assert_sink<T: ResultSink>() {}
    }
}
