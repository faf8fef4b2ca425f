// SPDX-License-Identifier: MIT OR Apache-2.0

//! Saving submitted files through a transient copy

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{BoardError, SubmittedFile};

/// Transient copy of a submitted payload. The backing file is removed on drop.
pub struct DownloadHandle {
    temp: NamedTempFile,
    file_name: String,
}

impl DownloadHandle {
    /// Stage the payload in a fresh temp file
    pub fn create(file: &SubmittedFile) -> Result<Self, BoardError> {
        let mut temp = tempfile::Builder::new()
            .prefix("assignment-")
            .tempfile()
            .map_err(BoardError::Download)?;
        temp.write_all(file.bytes()).map_err(BoardError::Download)?;
        temp.flush().map_err(BoardError::Download)?;

        debug!(path = %temp.path().display(), "Staged transient download copy");

        Ok(Self {
            temp,
            file_name: safe_file_name(file.name()),
        })
    }

    /// Location of the staged copy
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Name to save under, reduced to a single path component
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drop for DownloadHandle {
    fn drop(&mut self) {
        debug!(path = %self.temp.path().display(), "Released transient download copy");
    }
}

fn safe_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "download".to_string())
}

/// Where a download ends up
pub trait SaveTarget {
    /// Persist the staged copy. `Ok(None)` means the save was declined.
    fn save(&mut self, handle: &DownloadHandle) -> std::io::Result<Option<PathBuf>>;
}

/// Saves into a fixed directory under the submitted file name
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, handle: &DownloadHandle) -> std::io::Result<Option<PathBuf>> {
        std::fs::create_dir_all(&self.dir)?;
        let dest = self.dir.join(handle.file_name());
        std::fs::copy(handle.path(), &dest)?;
        Ok(Some(dest))
    }
}
