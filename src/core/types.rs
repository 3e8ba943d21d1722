//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Namespace`] - Validated slash-delimited namespace path
//! - [`ArtifactName`] - Validated artifact name
//! - [`TagName`] - Validated tag name
//! - [`Revision`] - Caller-supplied revision number
//! - [`StorageMode`] - How a revision's payload is stored
//!
//! # Validation
//!
//! These types enforce validity at construction time. A [`Namespace`] maps
//! 1:1 to nested directories under the store root, so its validation rules
//! exist to keep that mapping unambiguous: no empty or dot segments, and no
//! segment that collides with the layout's own `artifacts`/`tags`
//! directories.
//!
//! # Examples
//!
//! ```
//! use artifact_store::core::types::{ArtifactName, Namespace, TagName};
//!
//! let ns = Namespace::new("project/a").unwrap();
//! assert_eq!(ns.as_str(), "project/a");
//!
//! assert!(Namespace::new("project/../escape").is_err());
//! assert!(ArtifactName::new("with/slash").is_err());
//! assert!(TagName::new("").is_err());
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("invalid artifact name: {0}")]
    InvalidArtifactName(String),

    #[error("invalid tag name: {0}")]
    InvalidTagName(String),
}

/// Directory names the on-disk layout reserves inside a namespace.
const LAYOUT_DIRS: [&str; 2] = ["artifacts", "tags"];

/// A validated, slash-delimited namespace path.
///
/// Namespaces are hierarchical (`project/a`) and map directly to nested
/// directories under the store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Create a new validated namespace.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidNamespace` if the path is empty, absolute,
    /// contains empty or dot segments, or uses a reserved segment name.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidNamespace(
                "namespace cannot be empty".into(),
            ));
        }
        if name.starts_with('/') || name.ends_with('/') {
            return Err(TypeError::InvalidNamespace(format!(
                "namespace '{}' must be a relative path without leading or trailing '/'",
                name
            )));
        }
        for segment in name.split('/') {
            if segment.is_empty() {
                return Err(TypeError::InvalidNamespace(format!(
                    "namespace '{}' contains an empty segment",
                    name
                )));
            }
            if segment == "." || segment == ".." {
                return Err(TypeError::InvalidNamespace(format!(
                    "namespace '{}' contains a dot segment",
                    name
                )));
            }
            if LAYOUT_DIRS.contains(&segment) {
                return Err(TypeError::InvalidNamespace(format!(
                    "namespace '{}' uses reserved segment '{}'",
                    name, segment
                )));
            }
        }
        Ok(Self(name))
    }

    /// The namespace as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace as a relative path.
    pub fn as_rel_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Namespace {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Namespace::new(value)
    }
}

impl From<Namespace> for String {
    fn from(value: Namespace) -> Self {
        value.0
    }
}

/// A validated artifact name, unique within its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactName(String);

impl ArtifactName {
    /// Create a new validated artifact name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidArtifactName` if the name is empty,
    /// contains a path separator, or starts with a dot.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        validate_component(&name).map_err(TypeError::InvalidArtifactName)?;
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ArtifactName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ArtifactName::new(value)
    }
}

impl From<ArtifactName> for String {
    fn from(value: ArtifactName) -> Self {
        value.0
    }
}

/// A validated tag name, scoped to one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Create a new validated tag name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidTagName` if the name is empty, contains a
    /// path separator, or starts with a dot.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        validate_component(&name).map_err(TypeError::InvalidTagName)?;
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TagName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TagName::new(value)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

/// Shared validation for single-component names (artifacts and tags).
fn validate_component(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".into());
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!("name '{}' cannot contain a path separator", name));
    }
    if name.starts_with('.') {
        return Err(format!("name '{}' cannot start with '.'", name));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(format!("name '{}' contains control characters", name));
    }
    Ok(())
}

/// A caller-supplied revision number.
///
/// Revisions are not auto-incremented and need not be contiguous; the only
/// invariant is uniqueness per `(namespace, artifact)`.
pub type Revision = u64;

/// How a revision's payload is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// Compress the source tree into a single `.tar.xz` archive.
    #[default]
    Archive,
    /// Copy files into the store verbatim. Not implemented; selecting it
    /// fails with `StoreError::Unsupported`.
    Copy,
}
