//! Artifact storage trait and the filesystem implementation.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{BranchflowError, Result};

/// Storage backing a workflow artifact.
///
/// Implementations must never truncate existing content.
pub trait ArtifactStore: Send + Sync {
    /// Returns the artifact path.
    fn path(&self) -> &Path;

    /// Returns true if the artifact exists.
    fn exists(&self) -> bool;

    /// Creates the artifact with `header` as its initial content.
    ///
    /// Returns `Ok(false)` without writing when the artifact already exists.
    fn create(&self, header: &str) -> Result<bool>;

    /// Appends `block` to the artifact.
    fn append(&self, block: &str) -> Result<()>;

    /// Returns the artifact path as a display string.
    fn display_path(&self) -> String {
        self.path().display().to_string()
    }
}

/// An artifact stored as a file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    path: PathBuf,
}

impl FileArtifactStore {
    /// Creates a store for the file at `path`. Nothing is touched on disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtifactStore for FileArtifactStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn create(&self, header: &str) -> Result<bool> {
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(BranchflowError::artifact_create(&self.path, e)),
        };

        write_header(&self.path, &mut file, header)?;

        debug!(path = %self.path.display(), "Artifact created");
        Ok(true)
    }

    fn append(&self, block: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BranchflowError::artifact_append(&self.path, e))?;

        file.write_all(block.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| BranchflowError::artifact_append(&self.path, e))
    }
}

/// Writes the header of a freshly created artifact. On failure the partial
/// file is removed so a later run creates it again with its header.
fn write_header(path: &Path, file: &mut impl Write, header: &str) -> Result<()> {
    let written = file.write_all(header.as_bytes()).and_then(|()| file.flush());
    if let Err(e) = written {
        if let Err(cleanup) = std::fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "Failed to remove partial artifact");
        }
        return Err(BranchflowError::artifact_create(path, e));
    }
    Ok(())
}
