//! File-per-key JSON storage.
//!
//! A small key-value layer over a data directory: each key maps to
//! `<root>/<key>.json` holding one pretty-printed JSON value. Writes go
//! through a temp file in the same directory followed by an atomic rename,
//! so a crash never leaves a half-written record behind.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

/// Key holding the single stored [`UserProfile`](crate::models::UserProfile).
pub const KEY_USER_INPUT: &str = "userInput";
/// Key holding the last generated plan.
pub const KEY_CURRENT_PLAN: &str = "currentPlan";
/// Key holding the saved-plan collection, newest first.
pub const KEY_SAVED_PLANS: &str = "savedPlans";

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Handle to one storage directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open the storage directory, creating it if necessary.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and decode the value under `key`. An absent key is `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Encode and write the value under `key`, replacing any previous value.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let temp = NamedTempFile::new_in(&self.root)?;
        let mut writer = BufWriter::new(&temp);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        drop(writer);
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| StoreError::Io(e.error))?;
        debug!(key, path = %path.display(), "wrote storage record");
        Ok(())
    }

    /// Keys are short identifiers, never paths.
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Rec {
        n: u32,
        label: String,
    }

    fn sample() -> Rec {
        Rec {
            n: 7,
            label: "seven".to_owned(),
        }
    }

    #[test]
    fn put_then_get_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();

        store.put("rec", &sample()).unwrap();
        let back: Option<Rec> = store.get("rec").unwrap();
        assert_eq!(back, Some(sample()));
    }

    #[test]
    fn get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let back: Option<Rec> = store.get("absent").unwrap();
        assert!(back.is_none());
    }

    #[test]
    fn put_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();

        store.put("rec", &sample()).unwrap();
        let replacement = Rec {
            n: 8,
            label: "eight".to_owned(),
        };
        store.put("rec", &replacement).unwrap();

        let back: Option<Rec> = store.get("rec").unwrap();
        assert_eq!(back, Some(replacement));
    }

    #[test]
    fn value_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = Store::open(dir.path()).unwrap();
            store.put("rec", &sample()).unwrap();
        }
        let store = Store::open(dir.path()).unwrap();
        let back: Option<Rec> = store.get("rec").unwrap();
        assert_eq!(back, Some(sample()));
    }

    #[test]
    fn corrupt_record_surfaces_json_error() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();

        std::fs::write(dir.path().join("rec.json"), "not json {{{").unwrap();
        let result = store.get::<Rec>("rec");
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("data");
        let store = Store::open(&nested).unwrap();
        assert_eq!(store.root(), nested.as_path());
        assert!(nested.is_dir());
    }
}
