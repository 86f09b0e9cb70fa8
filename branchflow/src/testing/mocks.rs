//! In-memory artifact store for testing.

use parking_lot::Mutex;
use std::io;
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactStore;
use crate::errors::{BranchflowError, Result};

/// An artifact held in memory, with switchable failures.
#[derive(Debug)]
pub struct MemoryArtifactStore {
    path: PathBuf,
    content: Mutex<Option<String>>,
    fail_create: bool,
    fail_appends: Mutex<Vec<usize>>,
    fail_all_appends: bool,
    append_calls: Mutex<usize>,
}

impl MemoryArtifactStore {
    /// Creates an empty (absent) artifact.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: Mutex::new(None),
            fail_create: false,
            fail_appends: Mutex::new(Vec::new()),
            fail_all_appends: false,
            append_calls: Mutex::new(0),
        }
    }

    /// Creates a store whose artifact already holds `content`.
    #[must_use]
    pub fn existing(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let store = Self::new(path);
        *store.content.lock() = Some(content.into());
        store
    }

    /// Makes every create call fail.
    #[must_use]
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Makes every append call fail.
    #[must_use]
    pub fn failing_appends(mut self) -> Self {
        self.fail_all_appends = true;
        self
    }

    /// Makes the append call with the given zero-based index fail.
    #[must_use]
    pub fn failing_append_at(self, index: usize) -> Self {
        self.fail_appends.lock().push(index);
        self
    }

    /// Returns the current content, or `None` if the artifact is absent.
    #[must_use]
    pub fn content(&self) -> Option<String> {
        self.content.lock().clone()
    }

    /// Returns how many append calls were made, failed ones included.
    #[must_use]
    pub fn append_calls(&self) -> usize {
        *self.append_calls.lock()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.content.lock().is_some()
    }

    fn create(&self, header: &str) -> Result<bool> {
        if self.fail_create {
            return Err(BranchflowError::artifact_create(
                &self.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "create disabled"),
            ));
        }

        let mut content = self.content.lock();
        if content.is_some() {
            return Ok(false);
        }
        *content = Some(header.to_string());
        Ok(true)
    }

    fn append(&self, block: &str) -> Result<()> {
        let index = {
            let mut calls = self.append_calls.lock();
            let index = *calls;
            *calls += 1;
            index
        };

        if self.fail_all_appends || self.fail_appends.lock().contains(&index) {
            return Err(BranchflowError::artifact_append(
                &self.path,
                io::Error::new(io::ErrorKind::Other, "append disabled"),
            ));
        }

        self.content
            .lock()
            .get_or_insert_with(String::new)
            .push_str(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryArtifactStore::new("mem.txt");
        assert!(!store.exists());
        assert!(store.create("h\n").unwrap());
        assert!(!store.create("again\n").unwrap());
        store.append("b\n").unwrap();
        assert_eq!(store.content().unwrap(), "h\nb\n");
        assert_eq!(store.append_calls(), 1);
    }

    #[test]
    fn test_failing_append_at() {
        let store = MemoryArtifactStore::existing("mem.txt", "").failing_append_at(1);
        assert!(store.append("a").is_ok());
        assert!(store.append("b").is_err());
        assert!(store.append("c").is_ok());
        assert_eq!(store.content().unwrap(), "ac");
        assert_eq!(store.append_calls(), 3);
    }

    #[test]
    fn test_failing_create() {
        let store = MemoryArtifactStore::new("mem.txt").failing_create();
        assert!(store.create("h").unwrap_err().is_fatal());
        assert!(!store.exists());
    }
}
