//! core::paths
//!
//! Centralized path routing for store locations.
//!
//! # Storage Layout
//!
//! All data lives under the validated store root:
//! - `<root>/.artifact_store` - sentinel marker file
//! - `<root>/<namespace>/artifacts/<artifact>-<revision>.tar.xz` - archive
//! - `<root>/<namespace>/artifacts/<artifact>-<revision>.meta.json` - metadata
//! - `<root>/<namespace>/tags/<artifact>-<tag>` - tag pointer (symlink)
//!
//! **Hard rule:** no code outside this module computes layout paths or
//! parses layout file names. All routing goes through [`StorePaths`].
//!
//! # Example
//!
//! ```
//! use artifact_store::core::paths::StorePaths;
//! use artifact_store::core::types::{ArtifactName, Namespace};
//! use std::path::PathBuf;
//!
//! let paths = StorePaths::new(PathBuf::from("/store"));
//! let ns = Namespace::new("project/a").unwrap();
//! let artifact = ArtifactName::new("artifact1").unwrap();
//!
//! assert_eq!(
//!     paths.archive_path(&ns, &artifact, 1),
//!     PathBuf::from("/store/project/a/artifacts/artifact1-1.tar.xz")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::{ArtifactName, Namespace, Revision, TagName};

/// File name of the sentinel marker denoting a valid store root.
pub const MARKER_FILE: &str = ".artifact_store";

/// Directory name holding archives and metadata within a namespace.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// Directory name holding tag pointers within a namespace.
pub const TAGS_DIR: &str = "tags";

/// File suffix of revision archives.
pub const ARCHIVE_SUFFIX: &str = ".tar.xz";

/// File suffix of revision metadata documents.
pub const META_SUFFIX: &str = ".meta.json";

/// Centralized path routing for one store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    root: PathBuf,
}

impl StorePaths {
    /// Create path routing rooted at the given (already resolved) directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the sentinel marker file.
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(MARKER_FILE)
    }

    /// Directory of a namespace.
    pub fn namespace_dir(&self, namespace: &Namespace) -> PathBuf {
        self.root.join(namespace.as_rel_path())
    }

    /// `artifacts/` directory of a namespace.
    pub fn artifacts_dir(&self, namespace: &Namespace) -> PathBuf {
        self.namespace_dir(namespace).join(ARTIFACTS_DIR)
    }

    /// `tags/` directory of a namespace.
    pub fn tags_dir(&self, namespace: &Namespace) -> PathBuf {
        self.namespace_dir(namespace).join(TAGS_DIR)
    }

    /// Archive file of one revision.
    pub fn archive_path(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        revision: Revision,
    ) -> PathBuf {
        self.artifacts_dir(namespace)
            .join(format!("{}-{}{}", artifact, revision, ARCHIVE_SUFFIX))
    }

    /// Metadata file of one revision.
    pub fn meta_path(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        revision: Revision,
    ) -> PathBuf {
        self.artifacts_dir(namespace)
            .join(format!("{}-{}{}", artifact, revision, META_SUFFIX))
    }

    /// Tag pointer of one artifact tag.
    pub fn tag_path(&self, namespace: &Namespace, artifact: &ArtifactName, tag: &TagName) -> PathBuf {
        self.tags_dir(namespace).join(format!("{}-{}", artifact, tag))
    }

    /// Parse an `artifacts/` entry name into `(artifact, revision)`.
    ///
    /// Returns `None` for names that do not carry the archive suffix or a
    /// numeric revision. The revision is the part after the last `-`, so
    /// artifact names containing dashes parse correctly.
    pub fn parse_archive_name(name: &str) -> Option<(String, Revision)> {
        let stem = name.strip_suffix(ARCHIVE_SUFFIX)?;
        let (artifact, revision) = stem.rsplit_once('-')?;
        if artifact.is_empty() {
            return None;
        }
        let revision = revision.parse().ok()?;
        Some((artifact.to_string(), revision))
    }

    /// Parse a `tags/` entry name into a tag name, given its artifact.
    ///
    /// Returns `None` when the entry belongs to a different artifact.
    pub fn parse_tag_name(entry: &str, artifact: &ArtifactName) -> Option<String> {
        let rest = entry.strip_prefix(artifact.as_str())?;
        let tag = rest.strip_prefix('-')?;
        if tag.is_empty() {
            return None;
        }
        Some(tag.to_string())
    }

    /// Parse an archive file path back into `(artifact, revision)`.
    ///
    /// Used when resolving an existing tag pointer to the revision its
    /// target archive belongs to.
    pub fn parse_archive_path(path: &Path) -> Option<(String, Revision)> {
        Self::parse_archive_name(path.file_name()?.to_str()?)
    }
}
