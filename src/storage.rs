//! Durable key-value storage for persisted theme state.
//!
//! The store only needs localStorage-shaped semantics: string keys, string
//! values, whole-value reads and writes. [`FileStore`] backs each key with
//! one file under a root directory; [`MemoryStore`] keeps everything in a
//! map for tests and embedding.

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A client-scoped persistent key-value store.
pub trait KvStore {
    /// Read a value. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key entirely. Deleting an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Map-backed store with no persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Suffix for in-flight write staging files.
const STAGING_SUFFIX: &str = ".tmp~";

/// Filesystem-backed store: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open/create a store rooted at the given directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Build the on-disk path for a key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.key_path(key);
        // Write to a sibling temporary file first so partial writes do not
        // corrupt the last known-good value. The suffix contains '~', which
        // `validate_key` rejects, so a staging path can never be a live key.
        let tmp_path = self.root.join(format!("{key}{STAGING_SUFFIX}"));
        fs::write(&tmp_path, value)?;
        // Rename is atomic on most filesystems, making this "all or nothing".
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Validate keys before touching the filesystem.
fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key cannot be empty".to_string()));
    }
    if key == "." || key == ".." {
        return Err(StorageError::InvalidKey(
            "key cannot be '.' or '..'".to_string(),
        ));
    }
    if key
        .chars()
        .any(|ch| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.'))
    {
        return Err(StorageError::InvalidKey(format!(
            "key can only contain ASCII letters, numbers, '.', '-', '_': {key}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Per-process counter to avoid temp-dir name collisions in fast test runs.
    static NEXT_TMP_ID: AtomicU64 = AtomicU64::new(1);

    /// Build an isolated temporary file store for each test.
    fn test_store() -> FileStore {
        let unique = NEXT_TMP_ID.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let root = std::env::temp_dir().join(format!("tinct-storage-test-{millis}-{unique}"));
        FileStore::open(root).expect("temp store should open")
    }

    // Ensures values round-trip through disk across store instances.
    #[test]
    fn set_then_get_round_trips_across_instances() {
        let mut store = test_store();
        store.set("themeColors", "{\"bg\":\"#ffffff\"}").expect("set");

        let reopened = FileStore::open(&store.root).expect("reopen");
        assert_eq!(
            reopened.get("themeColors").expect("get").as_deref(),
            Some("{\"bg\":\"#ffffff\"}")
        );
    }

    #[test]
    fn absent_key_reads_as_none() {
        let store = test_store();
        assert!(store.get("themeColors").expect("get").is_none());
    }

    #[test]
    fn remove_deletes_and_is_idempotent() {
        let mut store = test_store();
        store.set("themeColors", "{}").expect("set");
        store.remove("themeColors").expect("remove");
        assert!(store.get("themeColors").expect("get").is_none());
        store.remove("themeColors").expect("second remove");
    }

    // Ensures invalid keys are rejected before any filesystem access.
    #[test]
    fn invalid_keys_are_rejected() {
        let mut store = test_store();
        for bad in ["", ".", "..", "a/b", "has space", "semi;colon"] {
            let err = store.set(bad, "x").expect_err("must fail");
            assert!(matches!(err, StorageError::InvalidKey(_)), "key: {bad:?}");
        }
    }

    #[test]
    fn overwrite_replaces_previous_value() {
        let mut store = test_store();
        store.set("themeColors", "old").expect("set old");
        store.set("themeColors", "new").expect("set new");
        assert_eq!(store.get("themeColors").expect("get").as_deref(), Some("new"));
    }

    // Ensures dotted keys sharing a stem do not share a staging path.
    #[test]
    fn dotted_keys_with_shared_stem_do_not_collide() {
        let mut store = test_store();
        store.set("theme.a", "first").expect("set theme.a");
        store.set("theme.b", "second").expect("set theme.b");
        assert_eq!(store.get("theme.a").expect("get").as_deref(), Some("first"));
        assert_eq!(store.get("theme.b").expect("get").as_deref(), Some("second"));
    }

    // Ensures writing a key never disturbs a similarly named sibling key.
    #[test]
    fn staging_write_does_not_clobber_sibling_key() {
        let mut store = test_store();
        store.set("x.tmp", "keep").expect("set x.tmp");
        store.set("x", "new").expect("set x");
        assert_eq!(store.get("x.tmp").expect("get").as_deref(), Some("keep"));
        assert_eq!(store.get("x").expect("get").as_deref(), Some("new"));
    }

    #[test]
    fn memory_store_matches_file_store_semantics() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").expect("get").is_none());
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").expect("get").as_deref(), Some("v"));
        store.remove("k").expect("remove");
        assert!(store.get("k").expect("get").is_none());
        store.remove("k").expect("idempotent remove");
    }
}
