//! storage::local
//!
//! The real-filesystem [`StoreIo`] backend.

use std::fs;
use std::path::{Path, PathBuf};

use super::{DirEntryInfo, EntryKind, StoreIo};
use crate::core::errors::StoreError;

/// Store I/O backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        LocalFs
    }
}

impl StoreIo for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as present
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(path).map_err(|e| StoreError::io(path, e))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        fs::read(path).map_err(|e| StoreError::io(path, e))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        fs::write(path, bytes).map_err(|e| StoreError::io(path, e))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, StoreError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| StoreError::io(path, e))? {
            let entry = entry.map_err(|e| StoreError::io(path, e))?;
            let meta = fs::symlink_metadata(entry.path())
                .map_err(|e| StoreError::io(entry.path(), e))?;
            let kind = if meta.file_type().is_symlink() {
                EntryKind::Symlink
            } else if meta.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn replace_link(&self, link: &Path, target: &Path) -> Result<(), StoreError> {
        let file_name = link
            .file_name()
            .ok_or_else(|| {
                StoreError::io(
                    link,
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "link has no file name"),
                )
            })?
            .to_string_lossy();
        // Write-new-then-rename-over: rename(2) atomically replaces the old
        // pointer, so readers never observe a missing tag.
        let tmp = link.with_file_name(format!(".{}.tmp", file_name));
        if fs::symlink_metadata(&tmp).is_ok() {
            fs::remove_file(&tmp).map_err(|e| StoreError::io(&tmp, e))?;
        }
        std::os::unix::fs::symlink(target, &tmp).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, link).map_err(|e| StoreError::io(link, e))
    }

    fn read_link(&self, link: &Path) -> Result<Option<PathBuf>, StoreError> {
        match fs::read_link(link) {
            Ok(target) => Ok(Some(target)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(link, e)),
        }
    }
}
