//! core::tags
//!
//! Mutable named pointers to revision archives.
//!
//! A tag is a symlink under `<namespace>/tags/` whose target is a revision's
//! archive path. Tags are created pointing at an existing revision and are
//! repointed with an atomic swap, so a concurrent reader sees either the old
//! target or the new one, never a missing pointer. There is no deletion
//! path.

use std::path::PathBuf;

use crate::core::errors::StoreError;
use crate::core::paths::StorePaths;
use crate::core::root::RootManager;
use crate::core::types::{ArtifactName, Namespace, Revision, TagName};
use crate::storage::StoreIo;

/// The revision a tag currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub revision: Revision,
    /// The archive file the pointer targets.
    pub archive_path: PathBuf,
}

/// Manager for tag pointers.
pub struct TagManager<'a> {
    io: &'a dyn StoreIo,
    paths: &'a StorePaths,
}

impl<'a> TagManager<'a> {
    pub fn new(io: &'a dyn StoreIo, paths: &'a StorePaths) -> Self {
        Self { io, paths }
    }

    /// Point `tag` at a revision, selected either directly (`by_revision`)
    /// or by following another tag's current pointer (`by_tag`).
    ///
    /// # Errors
    ///
    /// - [`StoreError::Usage`] when both or neither selector is given,
    ///   before any side effect
    /// - [`StoreError::RevisionNotFound`] when `by_revision` names a
    ///   revision with no archive
    /// - [`StoreError::TagNotFound`] when `by_tag` names an absent tag
    pub fn assign(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        tag: &TagName,
        by_revision: Option<Revision>,
        by_tag: Option<&TagName>,
    ) -> Result<(), StoreError> {
        let target = match (by_revision, by_tag) {
            (Some(revision), None) => {
                RootManager::new(self.io, self.paths).validate()?;
                let archive = self.paths.archive_path(namespace, artifact, revision);
                if !self.io.exists(&archive) {
                    return Err(StoreError::RevisionNotFound {
                        namespace: namespace.to_string(),
                        artifact: artifact.to_string(),
                        revision,
                    });
                }
                archive
            }
            (None, Some(source)) => {
                RootManager::new(self.io, self.paths).validate()?;
                self.resolve(namespace, artifact, source)?.archive_path
            }
            (Some(_), Some(_)) => {
                return Err(StoreError::Usage(
                    "a tag target is selected by revision or by tag, not both".into(),
                ))
            }
            (None, None) => {
                return Err(StoreError::Usage(
                    "a tag target must be selected by revision or by tag".into(),
                ))
            }
        };

        self.io.create_dir_all(&self.paths.tags_dir(namespace))?;
        self.io
            .replace_link(&self.paths.tag_path(namespace, artifact, tag), &target)
    }

    /// Resolve a tag to the revision it currently points at.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TagNotFound`] when the tag is absent or its
    /// pointer does not name a revision archive.
    pub fn resolve(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        tag: &TagName,
    ) -> Result<ResolvedTag, StoreError> {
        RootManager::new(self.io, self.paths).validate()?;
        let link = self.paths.tag_path(namespace, artifact, tag);
        let not_found = || StoreError::TagNotFound {
            namespace: namespace.to_string(),
            artifact: artifact.to_string(),
            tag: tag.to_string(),
        };

        let target = self.io.read_link(&link)?.ok_or_else(not_found)?;
        let (_, revision) = StorePaths::parse_archive_path(&target).ok_or_else(not_found)?;
        Ok(ResolvedTag {
            revision,
            archive_path: target,
        })
    }
}
