//! Shared fixtures for CLI integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An initialized store root plus a source directory to archive.
pub struct TestStore {
    root: TempDir,
    data: TempDir,
}

impl TestStore {
    /// Create an initialized root and a `/data`-style source directory
    /// holding one file, `artifact1`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp root");
        let data = TempDir::new().expect("failed to create temp data dir");
        fs::write(data.path().join("artifact1"), "This is artifact 1").unwrap();

        let store = Self { root, data };
        store.cmd().arg("init").assert().success();
        store
    }

    /// A command invoking the binary with this store's root in the
    /// environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("artifact-store").expect("binary exists");
        cmd.env("ARTIFACT_STORE_ROOT", self.root.path());
        cmd
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    pub fn data_path(&self) -> &Path {
        self.data.path()
    }

    /// Store a revision of `artifact1` under `project/a`, optionally tagged.
    pub fn store_revision(&self, revision: u64, tag: Option<&str>) {
        let mut cmd = self.cmd();
        cmd.arg("store").arg("-r").arg(revision.to_string());
        if let Some(tag) = tag {
            cmd.arg("-t").arg(tag);
        }
        cmd.args(["project/a", "artifact1"])
            .arg(self.data.path())
            .assert()
            .success();
    }

    pub fn archive_path(&self, namespace: &str, artifact: &str, revision: u64) -> PathBuf {
        self.root
            .path()
            .join(namespace)
            .join("artifacts")
            .join(format!("{}-{}.tar.xz", artifact, revision))
    }

    pub fn meta_path(&self, namespace: &str, artifact: &str, revision: u64) -> PathBuf {
        self.root
            .path()
            .join(namespace)
            .join("artifacts")
            .join(format!("{}-{}.meta.json", artifact, revision))
    }

    pub fn tag_path(&self, namespace: &str, artifact: &str, tag: &str) -> PathBuf {
        self.root
            .path()
            .join(namespace)
            .join("tags")
            .join(format!("{}-{}", artifact, tag))
    }
}

/// All regular files and symlinks under `root`, as sorted root-relative
/// POSIX paths.
pub fn list_files(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let meta = fs::symlink_metadata(&path).unwrap();
            if meta.is_dir() {
                walk(&path, root, out);
            } else {
                out.push(
                    path.strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .replace('\\', "/"),
                );
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// Member names of a `.tar.xz` archive, sorted, directory slashes trimmed.
pub fn archive_members(path: &Path) -> Vec<String> {
    let file = fs::File::open(path).unwrap();
    let decoder = xz2::read::XzDecoder::new(file);
    let mut archive = tar::Archive::new(decoder);
    let mut names: Vec<String> = archive
        .entries()
        .unwrap()
        .map(|entry| {
            let name = entry
                .unwrap()
                .path()
                .unwrap()
                .to_string_lossy()
                .trim_end_matches('/')
                .to_string();
            if name.is_empty() {
                ".".to_string()
            } else {
                name
            }
        })
        .collect();
    names.sort();
    names
}
