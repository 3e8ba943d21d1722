//! storage
//!
//! Narrow storage capability for store-side I/O.
//!
//! # Architecture
//!
//! All reads and writes *inside* the store root go through the [`StoreIo`]
//! trait: marker checks, metadata files, archive bytes, tag pointers, and
//! directory listings. Core logic never calls `std::fs` for store state, so
//! it can be exercised against the in-memory [`MemFs`] backend without real
//! file I/O. Reading the *source* directory being archived is input-side and
//! stays ordinary filesystem access.
//!
//! Two backends:
//! - [`LocalFs`] - the real filesystem, used by the CLI
//! - [`MemFs`] - an in-memory tree for unit tests

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::MemFs;

use std::path::{Path, PathBuf};

use crate::core::errors::StoreError;

/// Kind of a directory entry, as far as the store layout cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// File name of the entry (no path components).
    pub name: String,
    pub kind: EntryKind,
}

/// Store-side filesystem capability.
///
/// The surface is deliberately narrow: exactly the operations the store
/// layout needs, nothing more. `replace_link` is the one operation with a
/// semantic guarantee: the swap is atomic, so a concurrent reader observes
/// either the old target or the new one, never a missing pointer.
pub trait StoreIo {
    /// Whether anything exists at `path` (file, directory, or symlink).
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all its ancestors; existing is fine.
    fn create_dir_all(&self, path: &Path) -> Result<(), StoreError>;

    /// Read a file's full contents.
    fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError>;

    /// Write a file's full contents, replacing any previous contents.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError>;

    /// List a directory, sorted by entry name.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, StoreError>;

    /// Atomically create or replace the symlink at `link` pointing at
    /// `target`.
    fn replace_link(&self, link: &Path, target: &Path) -> Result<(), StoreError>;

    /// Read the target of the symlink at `link`, or `None` if no pointer
    /// exists there.
    fn read_link(&self, link: &Path) -> Result<Option<PathBuf>, StoreError>;
}
