//! Key-value storage slots
//!
//! A slot holds one serialized collection under a fixed key. Reads of a
//! slot that was never written return `None`; clearing an empty slot is
//! not an error.

use parking_lot::Mutex;
use roster_core::StorageError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Key under which the roster is persisted
pub const DEFAULT_SLOT_KEY: &str = "hospital_workforce_data";

/// A single named storage slot
pub trait StorageSlot: Send + Sync {
    /// Slot key
    fn key(&self) -> &str;

    /// Read the slot contents, `None` if nothing was stored
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the slot exists but cannot be read
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the write fails
    fn write(&self, contents: &str) -> Result<(), StorageError>;

    /// Remove the slot contents
    ///
    /// # Errors
    /// Returns `StorageError::Io` if removal fails
    fn clear(&self) -> Result<(), StorageError>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for Arc<S> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        (**self).write(contents)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// Slot backed by `<dir>/<key>.json`
///
/// Writes go to a sibling temp file first and are renamed into place, so
/// a crash mid-write never leaves a truncated slot behind.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    /// Create slot for `key` inside `dir`
    #[must_use]
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{key}.json"));
        Self { key, path }
    }

    /// Create slot with the default roster key
    #[inline]
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, DEFAULT_SLOT_KEY)
    }

    /// Path of the backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::io(self.key.clone(), source)
    }
}

impl StorageSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::trace!(path = %self.path.display(), bytes = contents.len(), "slot written");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// In-memory slot, for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySlot {
    key: String,
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Create empty slot with the default roster key
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            key: DEFAULT_SLOT_KEY.to_string(),
            contents: Mutex::new(None),
        }
    }

    /// Create slot pre-filled with `contents`
    #[inline]
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let slot = Self::new();
        *slot.contents.lock() = Some(contents.into());
        slot
    }

    /// Current contents
    #[inline]
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        *self.contents.lock() = Some(contents.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.contents.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_slot_missing_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn file_slot_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path().join("nested"));

        slot.write("[1,2,3]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[1,2,3]"));
        assert!(slot.path().ends_with("hospital_workforce_data.json"));
        assert!(!slot.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn file_slot_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());

        slot.clear().unwrap();
        slot.write("x").unwrap();
        slot.clear().unwrap();
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn memory_slot_roundtrip() {
        let slot = MemorySlot::new();
        assert_eq!(slot.key(), DEFAULT_SLOT_KEY);
        slot.write("abc").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("abc"));
        slot.clear().unwrap();
        assert!(slot.contents().is_none());
    }

    #[test]
    fn arc_slot_shares_contents() {
        let slot = Arc::new(MemorySlot::new());
        let shared = Arc::clone(&slot);
        shared.write("shared").unwrap();
        assert_eq!(slot.contents().as_deref(), Some("shared"));
    }
}
