//! core::revision
//!
//! Revision creation: the orchestration path of the store.
//!
//! `store` validates the root, enforces revision uniqueness before any
//! filesystem mutation, archives the source directory with exclusions,
//! writes the metadata document, and finally points any requested tags at
//! the new archive.
//!
//! There is no rollback for partial failure after validation passes: a
//! crash between the archive write and the metadata write can leave a
//! half-created revision behind. That is a documented limitation of the
//! design, matched by the uniqueness check requiring *both* files, so a
//! half-created revision can be stored over.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::archive;
use crate::core::errors::StoreError;
use crate::core::metadata::{self, MetadataDoc, MetadataManager};
use crate::core::paths::StorePaths;
use crate::core::root::RootManager;
use crate::core::tags::TagManager;
use crate::core::types::{ArtifactName, Namespace, Revision, StorageMode, TagName};
use crate::storage::StoreIo;

/// The files a successful `store` produced.
#[derive(Debug, Clone)]
pub struct StoredRevision {
    pub archive_path: PathBuf,
    pub meta_path: PathBuf,
    /// Archive member names in archive order, root entry first.
    pub members: Vec<String>,
}

/// Orchestrates creation of one revision.
pub struct RevisionWriter<'a> {
    io: &'a dyn StoreIo,
    paths: &'a StorePaths,
}

impl<'a> RevisionWriter<'a> {
    pub fn new(io: &'a dyn StoreIo, paths: &'a StorePaths) -> Self {
        Self { io, paths }
    }

    /// Create revision `revision` of `artifact` from `source_dir`.
    ///
    /// # Errors
    ///
    /// In check order, all before any mutation:
    /// - [`StoreError::StoreRootInvalid`] - root missing or unmarked
    /// - [`StoreError::ArtifactExists`] - archive and metadata both present
    /// - [`StoreError::SourceInvalid`] - source missing or unreadable
    /// - [`StoreError::Unsupported`] - `StorageMode::Copy`
    /// - [`StoreError::InvalidMetaToken`] - malformed metadata pair
    #[allow(clippy::too_many_arguments)]
    pub fn store(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        revision: Revision,
        source_dir: &Path,
        tags: &[TagName],
        metadata_pairs: &[String],
        exclude_patterns: &[String],
        mode: StorageMode,
    ) -> Result<StoredRevision, StoreError> {
        RootManager::new(self.io, self.paths).validate()?;

        let archive_path = self.paths.archive_path(namespace, artifact, revision);
        let meta_path = self.paths.meta_path(namespace, artifact, revision);
        if self.io.exists(&archive_path) && self.io.exists(&meta_path) {
            return Err(StoreError::ArtifactExists {
                namespace: namespace.to_string(),
                artifact: artifact.to_string(),
                revision,
            });
        }

        if !source_dir.is_dir() || fs::read_dir(source_dir).is_err() {
            return Err(StoreError::SourceInvalid {
                path: source_dir.to_path_buf(),
            });
        }

        if mode == StorageMode::Copy {
            return Err(StoreError::Unsupported(
                "Copying files is not implemented yet.".into(),
            ));
        }

        let pairs = metadata::parse_pairs(metadata_pairs)?;

        let (bytes, members) = archive::build(source_dir, exclude_patterns)?;

        self.io
            .create_dir_all(&self.paths.artifacts_dir(namespace))?;
        self.io.write(&archive_path, &bytes)?;

        let doc = MetadataDoc::for_new_revision(&pairs, chrono::Utc::now().timestamp());
        MetadataManager::new(self.io, self.paths).write_new(namespace, artifact, revision, &doc)?;

        let tag_manager = TagManager::new(self.io, self.paths);
        for tag in tags {
            tag_manager.assign(namespace, artifact, tag, Some(revision), None)?;
        }

        Ok(StoredRevision {
            archive_path,
            meta_path,
            members,
        })
    }
}
