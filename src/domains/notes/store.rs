//! File-backed note store.
//!
//! Notes live in one JSON file as a pretty-printed array. Saving rewrites
//! the whole array, not atomically: a crash mid-write can truncate the file.
//! A corrupt file is treated as empty rather than escalated, so the next
//! save starts the store over. Both behaviors are deliberate; there is no
//! cross-process locking either, so concurrent external writers can race
//! the id sequence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::NoteError;

/// A persisted note record.
///
/// `id` is assigned as `existing_count + 1` at write time. Ids are
/// contiguous and increasing only while this process is the sole writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Note {
    /// Position-derived identifier, starting at 1.
    pub id: u64,

    /// The note text.
    pub text: String,

    /// Unix timestamp (seconds, fractional) of when the note was saved.
    pub ts: f64,
}

/// File-backed note store.
///
/// All file access goes through [`save`](NoteStore::save) and
/// [`list`](NoteStore::list) so the storage backend can be swapped without
/// touching the tool layer.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Create a store backed by the given file path. The file is created
    /// lazily on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a note and return the stored record.
    ///
    /// Reads the current array (a corrupt file counts as empty), assigns
    /// `id = len + 1`, stamps the current wall-clock time, and rewrites the
    /// whole file with 2-space indentation.
    pub fn save(&self, text: &str) -> Result<Note, NoteError> {
        let mut notes = self.read_notes()?;

        let note = Note {
            id: notes.len() as u64 + 1,
            text: text.to_string(),
            ts: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
        };
        notes.push(note.clone());

        let body = serde_json::to_string_pretty(&notes)?;
        fs::write(&self.path, body).map_err(|source| NoteError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved note {} to {}", note.id, self.path.display());
        Ok(note)
    }

    /// Return all notes in insertion order.
    ///
    /// A missing or corrupt file yields an empty list; only a real read
    /// failure (e.g. permissions) is an error.
    pub fn list(&self) -> Result<Vec<Note>, NoteError> {
        self.read_notes()
    }

    fn read_notes(&self) -> Result<Vec<Note>, NoteError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(NoteError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&raw) {
            Ok(notes) => Ok(notes),
            Err(e) => {
                // Corruption is swallowed: the store starts over on the
                // next save instead of failing the call.
                warn!(
                    "Notes file {} is not valid JSON ({}); treating as empty",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, NoteStore) {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(dir.path().join("notes.json"));
        (dir, store)
    }

    #[test]
    fn test_list_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.list().unwrap(), vec![]);
    }

    #[test]
    fn test_save_then_list_appends() {
        let (_dir, store) = temp_store();

        let first = store.save("first note").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.text, "first note");

        let second = store.save("second note").unwrap();
        assert_eq!(second.id, 2);

        let notes = store.list().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.last().unwrap().text, "second note");
        assert_eq!(notes.last().unwrap().id, notes.len() as u64);
    }

    #[test]
    fn test_timestamps_are_wall_clock() {
        let (_dir, store) = temp_store();
        let before = Utc::now().timestamp_micros() as f64 / 1_000_000.0;
        let note = store.save("stamped").unwrap();
        let after = Utc::now().timestamp_micros() as f64 / 1_000_000.0;
        assert!(note.ts >= before && note.ts <= after);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{not valid json").unwrap();

        assert_eq!(store.list().unwrap(), vec![]);
    }

    #[test]
    fn test_save_resets_corrupt_file() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "[[[").unwrap();

        let note = store.save("fresh start").unwrap();
        assert_eq!(note.id, 1);

        let notes = store.list().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "fresh start");
    }

    #[test]
    fn test_wrong_shape_reads_as_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), r#"{"id": 1}"#).unwrap();

        assert_eq!(store.list().unwrap(), vec![]);
    }

    #[test]
    fn test_file_is_pretty_printed() {
        let (_dir, store) = temp_store();
        store.save("layout check").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        // 2-space indented array of objects
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\n    \"id\": 1,"));
    }

    #[test]
    fn test_read_error_message_names_path() {
        let (_dir, store) = temp_store();
        let err = NoteError::Read {
            path: store.path().to_path_buf(),
            source: std::io::Error::from(ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Cannot read "));
        assert!(msg.contains("notes.json"));
    }

    #[test]
    fn test_write_error_on_missing_directory() {
        let store = NoteStore::new("/nonexistent-dir-12345/notes.json");
        let err = store.save("will fail").unwrap_err();
        assert!(matches!(err, NoteError::Write { .. }));
        assert!(err.to_string().starts_with("Cannot write to "));
    }
}
