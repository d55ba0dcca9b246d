//! Feedback slot persistence
//!
//! All entries live in one versioned JSON file holding a plain array of
//! entry objects. The file is read-modify-written synchronously within a
//! single key handler; multiple processes sharing the same file can lose
//! updates to each other. That is a documented limitation, not solved here.

use crate::model::FeedbackEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted slot. The version suffix changes only if the
/// entry layout ever becomes incompatible.
pub const SLOT_FILE: &str = "feedbacks_v1.json";

/// Handle to the persisted entry list.
///
/// Constructed with its path and passed to whoever needs it, so tests can
/// point it at a temporary directory.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot. A missing file is an empty list; malformed content is
    /// logged and treated as an empty list. Never fails, never panics.
    pub fn load(&self) -> Vec<FeedbackEntry> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read slot");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<FeedbackEntry>>(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed slot, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize and overwrite the slot with the given list.
    pub fn save(&self, entries: &[FeedbackEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries).context("failed to serialize entries")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write slot {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the slot file entirely.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove slot {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Load, append, save. Returns the updated list.
    pub fn append(&self, entry: FeedbackEntry) -> Result<Vec<FeedbackEntry>> {
        let mut entries = self.load();
        entries.push(entry);
        self.save(&entries)?;
        Ok(entries)
    }

    /// Load, remove the entry at `index`, save. An out-of-range index leaves
    /// the slot untouched. Returns the updated list.
    pub fn remove(&self, index: usize) -> Result<Vec<FeedbackEntry>> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Ok(entries);
        }
        entries.remove(index);
        self.save(&entries)?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn entry(name: &str) -> FeedbackEntry {
        FeedbackEntry {
            student_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            project: "Databases".to_string(),
            locality: None,
            rating: "4".to_string(),
            comments: None,
            created: Utc::now(),
        }
    }

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join(SLOT_FILE));
        (dir, store)
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_append_round_trip() {
        let (_dir, store) = temp_store();
        store.append(entry("Ada")).unwrap();
        store.append(entry("Grace")).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        // Insertion order is display order.
        assert_eq!(loaded[0].student_name, "Ada");
        assert_eq!(loaded[1].student_name, "Grace");
        assert!(!loaded[1].created.to_rfc3339().is_empty());
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_slot_loads_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"{"entries": []}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_remove_shifts_only_positions() {
        let (_dir, store) = temp_store();
        store.append(entry("Ada")).unwrap();
        store.append(entry("Grace")).unwrap();
        store.append(entry("Edsger")).unwrap();

        let after = store.remove(1).unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].student_name, "Ada");
        assert_eq!(after[1].student_name, "Edsger");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let (_dir, store) = temp_store();
        store.append(entry("Ada")).unwrap();

        let after = store.remove(5).unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_clear_removes_slot_file() {
        let (_dir, store) = temp_store();
        store.append(entry("Ada")).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().is_empty());

        // Clearing an already-missing slot is fine.
        store.clear().unwrap();
    }
}
