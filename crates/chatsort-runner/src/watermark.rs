// SPDX-FileCopyrightText: 2026 Chatsort Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-brand last-processed-timestamp persistence.
//!
//! The watermark file is a flat JSON object mapping brand name to the
//! timestamp string of the last message that was classified and appended.
//! Single-process access is assumed; saves replace the file atomically.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use chatsort_core::ChatsortError;
use tracing::debug;

/// Stores the brand → last-processed-timestamp map on disk.
#[derive(Debug, Clone)]
pub struct WatermarkStore {
    path: PathBuf,
}

impl WatermarkStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the watermark map.
    ///
    /// A missing file yields an empty map (first run). A file that exists
    /// but cannot be read or parsed is an error: silently starting over
    /// would re-append every in-window conversation.
    pub fn load(&self) -> Result<HashMap<String, String>, ChatsortError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no watermark file, starting empty");
                return Ok(HashMap::new());
            }
            Err(e) => {
                return Err(ChatsortError::Storage {
                    message: format!(
                        "failed to read watermark file {}: {e}",
                        self.path.display()
                    ),
                    source: Some(Box::new(e)),
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| ChatsortError::Storage {
            message: format!(
                "failed to parse watermark file {}: {e}",
                self.path.display()
            ),
            source: Some(Box::new(e)),
        })
    }

    /// Saves the full watermark map, replacing the file atomically.
    pub fn save(&self, watermarks: &HashMap<String, String>) -> Result<(), ChatsortError> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = parent {
            std::fs::create_dir_all(dir).map_err(|e| ChatsortError::Storage {
                message: format!("failed to create watermark directory {}: {e}", dir.display()),
                source: Some(Box::new(e)),
            })?;
        }

        let json = serde_json::to_string_pretty(watermarks).map_err(|e| {
            ChatsortError::Storage {
                message: format!("failed to serialize watermarks: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        let dir = parent.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| {
            ChatsortError::Storage {
                message: format!("failed to create temporary watermark file: {e}"),
                source: Some(Box::new(e)),
            }
        })?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| ChatsortError::Storage {
                message: format!("failed to write watermarks: {e}"),
                source: Some(Box::new(e)),
            })?;
        tmp.persist(&self.path).map_err(|e| ChatsortError::Storage {
            message: format!(
                "failed to persist watermark file {}: {e}",
                self.path.display()
            ),
            source: Some(Box::new(e)),
        })?;

        debug!(path = %self.path.display(), brands = watermarks.len(), "watermarks saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatermarkStore::new(dir.path().join("watermarks.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatermarkStore::new(dir.path().join("state").join("watermarks.json"));

        let mut map = HashMap::new();
        map.insert("Acme".to_string(), "2024-01-02 10:00:00".to_string());
        store.save(&map).unwrap();

        assert_eq!(store.load().unwrap(), map);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatermarkStore::new(dir.path().join("watermarks.json"));

        let mut first = HashMap::new();
        first.insert("Acme".to_string(), "2024-01-01 00:00:00".to_string());
        first.insert("Beta".to_string(), "2024-01-01 00:00:00".to_string());
        store.save(&first).unwrap();

        let mut second = HashMap::new();
        second.insert("Acme".to_string(), "2024-01-02 10:00:00".to_string());
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
    }

    #[test]
    fn corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watermarks.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = WatermarkStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ChatsortError::Storage { .. }));
    }
}
