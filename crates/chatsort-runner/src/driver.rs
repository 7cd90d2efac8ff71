// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The sequential run driver.
//!
//! One run pulls the report once, groups it, then walks the brands in
//! order: skip already-processed conversations, classify, parse, append,
//! and persist the advanced watermark. Per-brand failures log and move on;
//! only source, watermark-load, and watermark-save failures abort the run.

use chatsort_core::{
    ChatsortError, ClassificationResult, ConversationClassifier, QuerySource, ResultSink,
    SheetRow, TIMESTAMP_FORMAT,
};
use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::grouper::group_by_brand;
use crate::watermark::WatermarkStore;

/// Outcome counts for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Brands classified, appended, and watermarked.
    pub processed: usize,
    /// Brands skipped because their latest message was already processed.
    pub skipped: usize,
    /// Brands that failed classification, parsing, or append.
    pub failed: usize,
}

/// Drives one triage pass over the configured source, classifier, and sink.
pub struct RunDriver<S, C, K> {
    source: S,
    classifier: C,
    sink: K,
    store: WatermarkStore,
    look_id: String,
    window_hours: i64,
    main_categories: Vec<String>,
}

impl<S, C, K> RunDriver<S, C, K>
where
    S: QuerySource,
    C: ConversationClassifier,
    K: ResultSink,
{
    pub fn new(
        source: S,
        classifier: C,
        sink: K,
        store: WatermarkStore,
        look_id: String,
        window_hours: i64,
        main_categories: Vec<String>,
    ) -> Self {
        Self {
            source,
            classifier,
            sink,
            store,
            look_id,
            window_hours,
            main_categories,
        }
    }

    /// Executes one pass with the trailing window anchored at `now`.
    pub async fn run(&self, now: NaiveDateTime) -> Result<RunSummary, ChatsortError> {
        let records = self.source.run_report(&self.look_id).await?;
        info!(records = records.len(), look_id = %self.look_id, "report fetched");

        let conversations = group_by_brand(&records, now, self.window_hours);
        let mut watermarks = self.store.load()?;
        let mut summary = RunSummary::default();

        for conversation in &conversations {
            let Some(latest) = conversation.latest_timestamp() else {
                continue;
            };
            let latest_str = latest.format(TIMESTAMP_FORMAT).to_string();
            let brand = conversation.brand.as_str();

            // Fixed-format timestamp strings compare correctly
            // lexicographically, matching the stored representation.
            if let Some(stored) = watermarks.get(brand) {
                if latest_str.as_str() <= stored.as_str() {
                    info!(brand, latest = %latest_str, "already processed, skipping");
                    summary.skipped += 1;
                    continue;
                }
            }

            let reply = match self.classifier.classify(&conversation.transcript()).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(brand, error = %e, "classification failed, skipping brand");
                    summary.failed += 1;
                    continue;
                }
            };

            let result = match ClassificationResult::from_reply(&reply) {
                Ok(result) => result,
                Err(e) => {
                    warn!(brand, error = %e, "unusable classification reply, skipping brand");
                    summary.failed += 1;
                    continue;
                }
            };

            if !self.main_categories.contains(&result.main_category) {
                warn!(
                    brand,
                    main_category = %result.main_category,
                    "main category outside the configured taxonomy"
                );
            }

            let row = SheetRow::new(&latest_str, brand, &result);
            if let Err(e) = self.sink.append(&row).await {
                warn!(brand, error = %e, "append failed, watermark not advanced");
                summary.failed += 1;
                continue;
            }

            watermarks.insert(brand.to_string(), latest_str.clone());
            self.store.save(&watermarks)?;
            info!(brand, latest = %latest_str, category = %result.main_category, "brand processed");
            summary.processed += 1;
        }

        if summary.processed == 0 {
            info!("no new conversations processed");
        }
        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            "run complete"
        );
        Ok(summary)
    }
}
