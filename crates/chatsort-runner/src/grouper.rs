// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Groups raw report records into per-brand conversations.
//!
//! Records outside the trailing window are excluded; records with an
//! unparseable timestamp are dropped individually without failing the
//! group step.

use std::collections::HashMap;

use chatsort_core::{BrandConversation, ChatMessage, RawRecord, TIMESTAMP_FORMAT};
use chatsort_looker::fields;
use chrono::{Duration, NaiveDateTime};
use tracing::{debug, warn};

/// Brand name applied when the source record carries none.
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// Parses one raw report record into a [`ChatMessage`].
///
/// Returns `None` when the timestamp is missing or unparseable; only
/// that record is dropped. Missing brand and content take their
/// documented defaults.
fn parse_message(record: &RawRecord) -> Option<ChatMessage> {
    let Some(raw_ts) = record.str_field(fields::MESSAGE_CREATED_AT) else {
        warn!("record has no message timestamp, dropping");
        return None;
    };
    let timestamp = match NaiveDateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT) {
        Ok(ts) => ts,
        Err(e) => {
            warn!(timestamp = %raw_ts, error = %e, "unparseable message timestamp, dropping record");
            return None;
        }
    };

    Some(ChatMessage {
        timestamp,
        brand: record.str_field_or(fields::BRAND_NAME, UNKNOWN_BRAND).to_string(),
        content: record.str_field_or(fields::MESSAGE_CONTENT, "").to_string(),
    })
}

/// Groups `records` into per-brand conversations covering the trailing
/// `window_hours` before `now`.
///
/// The cutoff boundary itself is excluded: only messages strictly newer
/// than `now - window_hours` are kept. Brands appear in first-seen record
/// order; within a brand, messages are sorted ascending by timestamp.
pub fn group_by_brand(
    records: &[RawRecord],
    now: NaiveDateTime,
    window_hours: i64,
) -> Vec<BrandConversation> {
    let cutoff = now - Duration::hours(window_hours);

    let mut conversations: Vec<BrandConversation> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(message) = parse_message(record) else {
            continue;
        };
        if message.timestamp <= cutoff {
            continue;
        }

        let slot = *index.entry(message.brand.clone()).or_insert_with(|| {
            conversations.push(BrandConversation::new(message.brand.as_str()));
            conversations.len() - 1
        });
        conversations[slot].messages.push((message.timestamp, message.content));
    }

    for conversation in &mut conversations {
        conversation.messages.sort_by_key(|(ts, _)| *ts);
    }

    debug!(
        brands = conversations.len(),
        cutoff = %cutoff.format(TIMESTAMP_FORMAT),
        "grouped report records"
    );
    conversations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ts: &str, brand: &str, content: &str) -> RawRecord {
        serde_json::from_value(serde_json::json!({
            fields::MESSAGE_CREATED_AT: ts,
            fields::BRAND_NAME: brand,
            fields::MESSAGE_CONTENT: content,
        }))
        .unwrap()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn groups_by_brand_in_first_seen_order() {
        let records = vec![
            record("2024-01-02 09:00:00", "Beta", "b1"),
            record("2024-01-02 10:00:00", "Acme", "a1"),
            record("2024-01-02 11:00:00", "Beta", "b2"),
        ];
        let groups = group_by_brand(&records, at("2024-01-02 12:00:00"), 24);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].brand, "Beta");
        assert_eq!(groups[1].brand, "Acme");
        assert_eq!(groups[0].messages.len(), 2);
    }

    #[test]
    fn sorts_messages_ascending_within_brand() {
        let records = vec![
            record("2024-01-02 11:00:00", "Acme", "late"),
            record("2024-01-02 09:00:00", "Acme", "early"),
        ];
        let groups = group_by_brand(&records, at("2024-01-02 12:00:00"), 24);

        assert_eq!(groups[0].messages[0].1, "early");
        assert_eq!(groups[0].messages[1].1, "late");
        assert_eq!(groups[0].latest_timestamp(), Some(at("2024-01-02 11:00:00")));
    }

    #[test]
    fn excludes_cutoff_boundary_and_older() {
        let records = vec![
            record("2024-01-01 12:00:00", "Acme", "exactly at cutoff"),
            record("2024-01-01 11:59:59", "Acme", "before cutoff"),
            record("2024-01-01 12:00:01", "Acme", "just inside"),
        ];
        let groups = group_by_brand(&records, at("2024-01-02 12:00:00"), 24);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].messages.len(), 1);
        assert_eq!(groups[0].messages[0].1, "just inside");
    }

    #[test]
    fn drops_unparseable_timestamps_without_failing() {
        let records = vec![
            record("not a timestamp", "Acme", "bad"),
            record("2024-01-02 10:00:00", "Acme", "good"),
        ];
        let groups = group_by_brand(&records, at("2024-01-02 12:00:00"), 24);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].messages.len(), 1);
        assert_eq!(groups[0].messages[0].1, "good");
    }

    #[test]
    fn missing_brand_and_content_take_defaults() {
        let record: RawRecord = serde_json::from_value(serde_json::json!({
            fields::MESSAGE_CREATED_AT: "2024-01-02 10:00:00",
        }))
        .unwrap();
        let groups = group_by_brand(&[record], at("2024-01-02 12:00:00"), 24);

        assert_eq!(groups[0].brand, UNKNOWN_BRAND);
        assert_eq!(groups[0].messages[0].1, "");
    }

    #[test]
    fn parse_message_builds_chat_message_with_defaults() {
        let full = record("2024-01-02 10:00:00", "Acme", "hello");
        let message = parse_message(&full).unwrap();
        assert_eq!(message.timestamp, at("2024-01-02 10:00:00"));
        assert_eq!(message.brand, "Acme");
        assert_eq!(message.content, "hello");

        let sparse: RawRecord = serde_json::from_value(serde_json::json!({
            fields::MESSAGE_CREATED_AT: "2024-01-02 10:00:00",
        }))
        .unwrap();
        let message = parse_message(&sparse).unwrap();
        assert_eq!(message.brand, UNKNOWN_BRAND);
        assert_eq!(message.content, "");

        let bad_ts = record("2024/01/02", "Acme", "hello");
        assert!(parse_message(&bad_ts).is_none());
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_by_brand(&[], at("2024-01-02 12:00:00"), 24);
        assert!(groups.is_empty());
    }
}
