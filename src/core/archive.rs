//! core::archive
//!
//! Builds the `.tar.xz` payload of a revision.
//!
//! The archive's root entry is `.` (the source directory itself) and every
//! member is named `./<relative-path>`, preserving the source tree.
//! Candidates are walked depth-first in sorted order and filtered through
//! [`crate::core::exclude`] before anything is written, so an excluded
//! directory never contributes entries.
//!
//! The source directory is caller input and is read with ordinary
//! filesystem access; only the finished archive bytes go through the store
//! side.

use std::fs;
use std::path::{Path, PathBuf};

use xz2::write::XzEncoder;

use crate::core::errors::StoreError;
use crate::core::exclude;

/// xz preset; matches the default level of the original format's tooling.
const COMPRESSION_LEVEL: u32 = 6;

/// One walked source entry.
#[derive(Debug, Clone)]
struct SourceEntry {
    /// POSIX-style relative path, `.`-prefixed (`./a/file.md`).
    rel: String,
    abs: PathBuf,
    is_dir: bool,
}

/// Build a `.tar.xz` archive of `source_dir`, honoring exclude patterns.
///
/// Returns the compressed bytes and the member names in archive order
/// (starting with the root entry `.`).
pub fn build(source_dir: &Path, patterns: &[String]) -> Result<(Vec<u8>, Vec<String>), StoreError> {
    let candidates = walk_sorted(source_dir)?;
    let names: Vec<String> = candidates.iter().map(|e| e.rel.clone()).collect();
    let included = exclude::filter_included(names, patterns);

    let mut entries: Vec<&SourceEntry> = Vec::with_capacity(included.len());
    {
        let mut keep = included.iter();
        let mut next = keep.next();
        for entry in &candidates {
            if Some(&entry.rel) == next {
                entries.push(entry);
                next = keep.next();
            }
        }
    }

    let encoder = XzEncoder::new(Vec::new(), COMPRESSION_LEVEL);
    let mut builder = tar::Builder::new(encoder);

    builder
        .append_dir(".", source_dir)
        .map_err(|e| StoreError::io(source_dir, e))?;
    let mut members = vec![".".to_string()];

    for entry in entries {
        if entry.rel == "." {
            continue;
        }
        if entry.is_dir {
            builder
                .append_dir(&entry.rel, &entry.abs)
                .map_err(|e| StoreError::io(&entry.abs, e))?;
        } else {
            builder
                .append_path_with_name(&entry.abs, &entry.rel)
                .map_err(|e| StoreError::io(&entry.abs, e))?;
        }
        members.push(entry.rel.clone());
    }

    let encoder = builder
        .into_inner()
        .map_err(|e| StoreError::io(source_dir, e))?;
    let bytes = encoder
        .finish()
        .map_err(|e| StoreError::io(source_dir, e))?;
    Ok((bytes, members))
}

/// Walk a source tree depth-first with sorted siblings, directories before
/// their contents. The root itself is the first candidate, named `.`.
fn walk_sorted(source_dir: &Path) -> Result<Vec<SourceEntry>, StoreError> {
    let mut out = vec![SourceEntry {
        rel: ".".to_string(),
        abs: source_dir.to_path_buf(),
        is_dir: true,
    }];
    walk_into(source_dir, ".", &mut out)?;
    Ok(out)
}

fn walk_into(dir: &Path, rel: &str, out: &mut Vec<SourceEntry>) -> Result<(), StoreError> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))? {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        children.push(entry.path());
    }
    children.sort();

    for abs in children {
        let name = match abs.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue, // non-UTF-8 names cannot be matched or archived portably
        };
        let child_rel = format!("{}/{}", rel, name);
        let is_dir = abs.is_dir();
        out.push(SourceEntry {
            rel: child_rel.clone(),
            abs: abs.clone(),
            is_dir,
        });
        if is_dir {
            walk_into(&abs, &child_rel, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn make_tree(root: &Path, files: &[&str], dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        for file in files {
            fs::write(root.join(file), format!("content of {}", file)).unwrap();
        }
    }

    fn archive_names(bytes: &[u8]) -> Vec<String> {
        let decoder = xz2::read::XzDecoder::new(bytes);
        let mut archive = tar::Archive::new(decoder);
        archive
            .entries()
            .unwrap()
            .map(|e| {
                e.unwrap()
                    .path()
                    .unwrap()
                    .to_string_lossy()
                    .trim_end_matches('/')
                    .to_string()
            })
            .map(|name| if name.is_empty() { ".".to_string() } else { name })
            .collect()
    }

    #[test]
    fn single_file_tree() {
        let dir = tempfile::tempdir().unwrap();
        make_tree(dir.path(), &["artifact1"], &[]);

        let (bytes, members) = build(dir.path(), &[]).unwrap();
        assert_eq!(members, vec![".", "./artifact1"]);

        let decoder = xz2::read::XzDecoder::new(bytes.as_slice());
        let mut archive = tar::Archive::new(decoder);
        let mut contents = Vec::new();
        for entry in archive.entries().unwrap() {
            let mut entry = entry.unwrap();
            if entry.path().unwrap().to_string_lossy().contains("artifact1") {
                let mut buf = String::new();
                entry.read_to_string(&mut buf).unwrap();
                contents.push(buf);
            }
        }
        assert_eq!(contents, vec!["content of artifact1"]);
    }

    #[test]
    fn members_are_sorted_depth_first() {
        let dir = tempfile::tempdir().unwrap();
        make_tree(dir.path(), &["z.txt", "a/b.txt"], &["a"]);

        let (_, members) = build(dir.path(), &[]).unwrap();
        assert_eq!(members, vec![".", "./a", "./a/b.txt", "./z.txt"]);
    }

    #[test]
    fn exclusion_vector_tree() {
        let dir = tempfile::tempdir().unwrap();
        make_tree(
            dir.path(),
            &[
                "artifact1",
                "file.txt",
                "file.md",
                "a/file.txt",
                "a/file.md",
                "a/a/file.txt",
                "a/a/file.md",
                "a/a/a/file.md",
                "a/b/file.md",
                "b/file.txt",
                "b/file.md",
            ],
            &["a/a/a", "a/b", "b"],
        );

        let patterns: Vec<String> = ["*file.txt", "./artifact1", "*/a/**/file.md"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let (bytes, members) = build(dir.path(), &patterns).unwrap();
        let expected = vec![
            ".",
            "./a",
            "./a/a",
            "./a/a/a",
            "./a/b",
            "./a/file.md",
            "./b",
            "./b/file.md",
            "./file.md",
        ];
        assert_eq!(members, expected);

        let mut unpacked = archive_names(&bytes);
        unpacked.sort();
        assert_eq!(unpacked, expected);
    }

    #[test]
    fn excluding_a_directory_drops_its_subtree() {
        let dir = tempfile::tempdir().unwrap();
        make_tree(dir.path(), &["keep.txt", "skip/inner.txt"], &["skip"]);

        let (_, members) = build(dir.path(), &["./skip".to_string()]).unwrap();
        assert_eq!(members, vec![".", "./keep.txt"]);
    }
}
