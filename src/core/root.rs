//! core::root
//!
//! Store root initialization and validation.
//!
//! A directory is a valid store root when it contains the sentinel marker
//! file (`.artifact_store`); presence alone denotes validity. Every other
//! operation validates the root before touching the layout.

use crate::core::errors::StoreError;
use crate::core::paths::StorePaths;
use crate::storage::StoreIo;

/// Manager for the on-disk root marker.
pub struct RootManager<'a> {
    io: &'a dyn StoreIo,
    paths: &'a StorePaths,
}

impl<'a> RootManager<'a> {
    pub fn new(io: &'a dyn StoreIo, paths: &'a StorePaths) -> Self {
        Self { io, paths }
    }

    /// Create the root directory if needed and write the marker file.
    ///
    /// Idempotent: initializing an already-valid root succeeds and changes
    /// nothing observable.
    pub fn initialize(&self) -> Result<(), StoreError> {
        self.io.create_dir_all(self.paths.root())?;
        self.io.write(&self.paths.marker_path(), b"")
    }

    /// Check that the root directory exists and carries the marker.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StoreRootInvalid`] otherwise.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.io.is_dir(self.paths.root()) && self.io.exists(&self.paths.marker_path()) {
            Ok(())
        } else {
            Err(StoreError::StoreRootInvalid {
                root: self.paths.root().to_path_buf(),
            })
        }
    }
}
