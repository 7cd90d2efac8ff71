// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Chatsort pipeline core: groups report records into per-brand
//! conversations, drives the classify/append loop sequentially, and
//! persists the per-brand watermark between runs.

pub mod driver;
pub mod grouper;
pub mod watermark;

pub use driver::{RunDriver, RunSummary};
pub use grouper::group_by_brand;
pub use watermark::WatermarkStore;
