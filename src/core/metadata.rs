//! core::metadata
//!
//! Per-revision JSON metadata: creation, read, and ordered edits.
//!
//! # Schema
//!
//! A metadata document is a flat JSON object. Two keys are reserved and
//! system-owned, written exactly once at revision creation:
//!
//! - `__API__` - schema version marker, constant `"1"`
//! - `__created_at` - creation time, integer epoch seconds
//!
//! Every other key is user-defined, string-valued, and mutable after
//! creation. Documents are persisted as 2-space-indented JSON with keys in
//! sorted order.
//!
//! # Edits
//!
//! Edits arrive as an ordered token sequence: `key=value` sets, `key=`
//! deletes. Tokens apply left to right, so a delete followed by a re-add of
//! the same key yields the new value. Deleting an absent key is a no-op.
//! Reserved keys in edit tokens are ignored; they cannot be altered this
//! way.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::core::errors::StoreError;
use crate::core::paths::StorePaths;
use crate::core::root::RootManager;
use crate::core::types::{ArtifactName, Namespace, Revision};
use crate::storage::StoreIo;

/// Reserved key carrying the metadata schema version.
pub const API_KEY: &str = "__API__";

/// Current metadata schema version value.
pub const API_VERSION: &str = "1";

/// Reserved key carrying the revision creation time (epoch seconds).
pub const CREATED_AT_KEY: &str = "__created_at";

/// The reserved, system-owned keys.
pub const RESERVED_KEYS: [&str; 2] = [API_KEY, CREATED_AT_KEY];

/// Whether a key is reserved (write-once, system-owned).
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// One parsed metadata edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaEdit {
    /// `key=value`: set or overwrite the key.
    Set(String, String),
    /// `key=`: delete the key if present.
    Delete(String),
}

impl MetaEdit {
    /// Parse an edit token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidMetaToken`] when the token contains no
    /// `=`.
    pub fn parse(token: &str) -> Result<Self, StoreError> {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| StoreError::InvalidMetaToken(token.to_string()))?;
        if value.is_empty() {
            Ok(MetaEdit::Delete(key.to_string()))
        } else {
            Ok(MetaEdit::Set(key.to_string(), value.to_string()))
        }
    }

    /// Parse a whole edit sequence, failing before any edit is applied.
    pub fn parse_all(tokens: &[String]) -> Result<Vec<Self>, StoreError> {
        tokens.iter().map(|t| MetaEdit::parse(t)).collect()
    }
}

/// Parse `key=value` creation pairs.
///
/// Unlike edits, a creation pair carries a value (possibly empty); a token
/// without `=` is still [`StoreError::InvalidMetaToken`].
pub fn parse_pairs(tokens: &[String]) -> Result<Vec<(String, String)>, StoreError> {
    tokens
        .iter()
        .map(|token| {
            token
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| StoreError::InvalidMetaToken(token.to_string()))
        })
        .collect()
}

/// A parsed metadata document.
///
/// Keys are kept in a `BTreeMap` so serialization is sorted without a
/// separate canonicalization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDoc {
    entries: BTreeMap<String, Value>,
}

impl MetadataDoc {
    /// Build the document for a freshly created revision: the reserved keys
    /// plus all user pairs merged in. User pairs cannot set reserved keys.
    pub fn for_new_revision(pairs: &[(String, String)], created_at: i64) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(API_KEY.to_string(), Value::String(API_VERSION.to_string()));
        entries.insert(CREATED_AT_KEY.to_string(), Value::from(created_at));
        for (key, value) in pairs {
            if is_reserved(key) {
                continue;
            }
            entries.insert(key.clone(), Value::String(value.clone()));
        }
        Self { entries }
    }

    /// Parse a persisted document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MetadataCorrupt`] when the bytes are not a JSON
    /// object.
    pub fn parse(bytes: &[u8], path: &Path) -> Result<Self, StoreError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| StoreError::MetadataCorrupt {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        match value {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            other => Err(StoreError::MetadataCorrupt {
                path: path.to_path_buf(),
                message: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    /// Apply parsed edits left to right. Reserved keys are ignored.
    pub fn apply(&mut self, edits: &[MetaEdit]) {
        for edit in edits {
            match edit {
                MetaEdit::Set(key, value) => {
                    if !is_reserved(key) {
                        self.entries
                            .insert(key.clone(), Value::String(value.clone()));
                    }
                }
                MetaEdit::Delete(key) => {
                    if !is_reserved(key) {
                        self.entries.remove(key);
                    }
                }
            }
        }
    }

    /// Look up a key's rendered value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The revision creation time, if the document carries one.
    pub fn created_at(&self) -> Option<i64> {
        self.entries.get(CREATED_AT_KEY).and_then(Value::as_i64)
    }

    /// Render as 2-space-indented JSON with sorted keys.
    ///
    /// With `include_reserved` unset, only user keys appear; an all-reserved
    /// document renders as `{}`.
    pub fn render(&self, include_reserved: bool) -> String {
        let view: BTreeMap<&String, &Value> = self
            .entries
            .iter()
            .filter(|(key, _)| include_reserved || !is_reserved(key))
            .collect();
        // BTreeMap of String/Value cannot fail to serialize
        serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
    }

    /// The persisted byte form: the full document, reserved keys included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.render(true).into_bytes();
        bytes.push(b'\n');
        bytes
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Manager for per-revision metadata files.
pub struct MetadataManager<'a> {
    io: &'a dyn StoreIo,
    paths: &'a StorePaths,
}

impl<'a> MetadataManager<'a> {
    pub fn new(io: &'a dyn StoreIo, paths: &'a StorePaths) -> Self {
        Self { io, paths }
    }

    /// Read a revision's metadata document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RevisionNotFound`] when the metadata file is
    /// absent, [`StoreError::MetadataCorrupt`] when it does not parse.
    pub fn read(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        revision: Revision,
    ) -> Result<MetadataDoc, StoreError> {
        RootManager::new(self.io, self.paths).validate()?;
        let path = self.paths.meta_path(namespace, artifact, revision);
        if !self.io.exists(&path) {
            return Err(StoreError::RevisionNotFound {
                namespace: namespace.to_string(),
                artifact: artifact.to_string(),
                revision,
            });
        }
        let bytes = self.io.read(&path)?;
        MetadataDoc::parse(&bytes, &path)
    }

    /// Apply an ordered edit sequence and persist the result.
    ///
    /// The whole token sequence is parsed before anything is applied, so a
    /// malformed token fails without touching the file.
    pub fn update(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        revision: Revision,
        tokens: &[String],
    ) -> Result<MetadataDoc, StoreError> {
        let edits = MetaEdit::parse_all(tokens)?;
        let mut doc = self.read(namespace, artifact, revision)?;
        doc.apply(&edits);
        let path = self.paths.meta_path(namespace, artifact, revision);
        self.io.write(&path, &doc.to_bytes())?;
        Ok(doc)
    }

    /// Persist a freshly built document for a new revision.
    pub(crate) fn write_new(
        &self,
        namespace: &Namespace,
        artifact: &ArtifactName,
        revision: Revision,
        doc: &MetadataDoc,
    ) -> Result<(), StoreError> {
        let path = self.paths.meta_path(namespace, artifact, revision);
        self.io.write(&path, &doc.to_bytes())
    }
}
