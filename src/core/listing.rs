//! core::listing
//!
//! Read-only enumeration over the on-disk layout.
//!
//! The listing engine only reads what the other managers maintain: a
//! namespace is any directory whose `artifacts/` child holds at least one
//! archive, an artifact is the name shared by its revision files, and tags
//! are the pointer entries scoped to one artifact.

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::errors::StoreError;
use crate::core::paths::{StorePaths, ARTIFACTS_DIR, TAGS_DIR};
use crate::core::root::RootManager;
use crate::core::types::{ArtifactName, Namespace, Revision};
use crate::storage::{EntryKind, StoreIo};

/// Read-only queries over the store layout.
pub struct ListingEngine<'a> {
    io: &'a dyn StoreIo,
    paths: &'a StorePaths,
}

impl<'a> ListingEngine<'a> {
    pub fn new(io: &'a dyn StoreIo, paths: &'a StorePaths) -> Self {
        Self { io, paths }
    }

    /// All namespaces containing at least one artifact, lexicographically
    /// sorted.
    pub fn namespaces(&self) -> Result<Vec<String>, StoreError> {
        RootManager::new(self.io, self.paths).validate()?;
        let mut found = Vec::new();
        self.scan_namespaces(self.paths.root(), "", &mut found)?;
        found.sort();
        Ok(found)
    }

    fn scan_namespaces(
        &self,
        dir: &Path,
        rel: &str,
        found: &mut Vec<String>,
    ) -> Result<(), StoreError> {
        for entry in self.io.read_dir(dir)? {
            if entry.kind != EntryKind::Dir {
                continue;
            }
            let child = dir.join(&entry.name);
            if entry.name == ARTIFACTS_DIR {
                if !rel.is_empty() && self.has_archives(&child)? {
                    found.push(rel.to_string());
                }
                continue;
            }
            if entry.name == TAGS_DIR {
                continue;
            }
            let child_rel = if rel.is_empty() {
                entry.name.clone()
            } else {
                format!("{}/{}", rel, entry.name)
            };
            self.scan_namespaces(&child, &child_rel, found)?;
        }
        Ok(())
    }

    fn has_archives(&self, artifacts_dir: &Path) -> Result<bool, StoreError> {
        Ok(self
            .io
            .read_dir(artifacts_dir)?
            .iter()
            .any(|e| StorePaths::parse_archive_name(&e.name).is_some()))
    }

    /// Artifact names in a namespace, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NamespaceNotFound`] when the namespace holds no
    /// artifacts.
    pub fn artifacts(&self, namespace: &Namespace) -> Result<Vec<String>, StoreError> {
        RootManager::new(self.io, self.paths).validate()?;
        let dir = self.paths.artifacts_dir(namespace);
        if !self.io.is_dir(&dir) {
            return Err(StoreError::NamespaceNotFound(namespace.to_string()));
        }
        let names: BTreeSet<String> = self
            .io
            .read_dir(&dir)?
            .iter()
            .filter_map(|e| StorePaths::parse_archive_name(&e.name))
            .map(|(artifact, _)| artifact)
            .collect();
        if names.is_empty() {
            return Err(StoreError::NamespaceNotFound(namespace.to_string()));
        }
        Ok(names.into_iter().collect())
    }

    /// Revision numbers of an artifact, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NamespaceNotFound`] when the namespace is
    /// unknown, [`StoreError::ArtifactNotFound`] when the artifact has no
    /// revisions.
    pub fn revisions(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
    ) -> Result<Vec<Revision>, StoreError> {
        RootManager::new(self.io, self.paths).validate()?;
        let dir = self.paths.artifacts_dir(namespace);
        if !self.io.is_dir(&dir) {
            return Err(StoreError::NamespaceNotFound(namespace.to_string()));
        }
        let revisions: BTreeSet<Revision> = self
            .io
            .read_dir(&dir)?
            .iter()
            .filter_map(|e| StorePaths::parse_archive_name(&e.name))
            .filter(|(name, _)| name.as_str() == artifact.as_str())
            .map(|(_, revision)| revision)
            .collect();
        if revisions.is_empty() {
            return Err(StoreError::ArtifactNotFound {
                namespace: namespace.to_string(),
                artifact: artifact.to_string(),
            });
        }
        Ok(revisions.into_iter().collect())
    }

    /// Tag names referencing any revision of an artifact, sorted.
    ///
    /// An artifact with no tags yields an empty list; an unknown artifact
    /// fails with [`StoreError::ArtifactNotFound`].
    pub fn tags(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
    ) -> Result<Vec<String>, StoreError> {
        // Establishes the artifact exists (and the root is valid).
        self.revisions(namespace, artifact)?;

        let dir = self.paths.tags_dir(namespace);
        if !self.io.is_dir(&dir) {
            return Ok(Vec::new());
        }
        Ok(self
            .io
            .read_dir(&dir)?
            .iter()
            .filter_map(|e| StorePaths::parse_tag_name(&e.name, artifact))
            .collect())
    }
}
