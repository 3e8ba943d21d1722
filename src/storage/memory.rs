//! storage::memory
//!
//! In-memory [`StoreIo`] backend for exercising core logic without real
//! file I/O.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{DirEntryInfo, EntryKind, StoreIo};
use crate::core::errors::StoreError;

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir,
    Link(PathBuf),
}

/// An in-memory filesystem tree.
///
/// Paths are stored verbatim, so tests should use absolute paths
/// consistently the way a real store root would.
#[derive(Debug, Default)]
pub struct MemFs {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_nodes<T>(&self, f: impl FnOnce(&mut BTreeMap<PathBuf, Node>) -> T) -> T {
        let mut nodes = self.nodes.lock().expect("MemFs lock poisoned");
        f(&mut nodes)
    }

    fn not_found(path: &Path) -> StoreError {
        StoreError::io(path, io::Error::new(io::ErrorKind::NotFound, "not found"))
    }
}

impl StoreIo for MemFs {
    fn exists(&self, path: &Path) -> bool {
        self.with_nodes(|nodes| nodes.contains_key(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.with_nodes(|nodes| matches!(nodes.get(path), Some(Node::Dir)))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StoreError> {
        self.with_nodes(|nodes| {
            let mut ancestors: Vec<&Path> = path.ancestors().collect();
            ancestors.reverse();
            for ancestor in ancestors {
                if ancestor.as_os_str().is_empty() {
                    continue;
                }
                match nodes.get(ancestor) {
                    None => {
                        nodes.insert(ancestor.to_path_buf(), Node::Dir);
                    }
                    Some(Node::Dir) => {}
                    Some(_) => {
                        return Err(StoreError::io(
                            ancestor,
                            io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
                        ))
                    }
                }
            }
            Ok(())
        })
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        self.with_nodes(|nodes| match nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            _ => Err(Self::not_found(path)),
        })
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        self.with_nodes(|nodes| {
            let parent = path.parent().ok_or_else(|| Self::not_found(path))?;
            if !matches!(nodes.get(parent), Some(Node::Dir)) {
                return Err(Self::not_found(parent));
            }
            nodes.insert(path.to_path_buf(), Node::File(bytes.to_vec()));
            Ok(())
        })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, StoreError> {
        self.with_nodes(|nodes| {
            if !matches!(nodes.get(path), Some(Node::Dir)) {
                return Err(Self::not_found(path));
            }
            let mut entries: Vec<DirEntryInfo> = nodes
                .iter()
                .filter(|(p, _)| p.parent() == Some(path))
                .map(|(p, node)| DirEntryInfo {
                    name: p
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    kind: match node {
                        Node::File(_) => EntryKind::File,
                        Node::Dir => EntryKind::Dir,
                        Node::Link(_) => EntryKind::Symlink,
                    },
                })
                .collect();
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(entries)
        })
    }

    fn replace_link(&self, link: &Path, target: &Path) -> Result<(), StoreError> {
        self.with_nodes(|nodes| {
            let parent = link.parent().ok_or_else(|| Self::not_found(link))?;
            if !matches!(nodes.get(parent), Some(Node::Dir)) {
                return Err(Self::not_found(parent));
            }
            // Single map insert: atomic by construction.
            nodes.insert(link.to_path_buf(), Node::Link(target.to_path_buf()));
            Ok(())
        })
    }

    fn read_link(&self, link: &Path) -> Result<Option<PathBuf>, StoreError> {
        self.with_nodes(|nodes| match nodes.get(link) {
            Some(Node::Link(target)) => Ok(Some(target.clone())),
            _ => Ok(None),
        })
    }
}
