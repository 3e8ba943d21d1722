//! Integration tests for the `list` command.

mod common;

use predicates::prelude::*;

use common::TestStore;

/// Two artifacts under `project/a`: artifact1 with revisions 1 (tag t2) and
/// 2 (tag t1), artifact2 with revision 1.
fn seeded() -> TestStore {
    let store = TestStore::new();
    store.store_revision(1, Some("t2"));
    store.store_revision(2, Some("t1"));
    store
        .cmd()
        .args(["store", "-r", "1", "project/a", "artifact2"])
        .arg(store.data_path())
        .assert()
        .success();
    store
}

#[test]
fn bad_argument_combinations_exit_2() {
    let store = seeded();
    let cases: &[&[&str]] = &[
        &["list"],
        &["list", "-n", "extra_arg"],
        &["list", "-a", "project/a", "extra_arg"],
        &["list", "-r"],
        &["list", "-r", "project/a"],
        &["list", "-r", "project/a", "artifact1", "extra_arg"],
        &["list", "-t"],
        &["list", "-t", "project/a"],
        &["list", "-t", "project/a", "artifact1", "extra_arg"],
        &["list", "-n", "-a"],
    ];
    for args in cases {
        store.cmd().args(*args).assert().failure().code(2);
    }
}

#[test]
fn namespaces() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-n"])
        .assert()
        .success()
        .stdout("project/a\n");
}

#[test]
fn artifacts_sorted() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-a", "project/a"])
        .assert()
        .success()
        .stdout("artifact1\nartifact2\n");
}

#[test]
fn artifacts_of_unknown_namespace_fail() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-a", "unknown/ns"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown/ns"));
}

#[test]
fn revisions_ascending() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-r", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn revisions_of_unknown_namespace_fail() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-r", "unknown/ns", "artifact1"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn revisions_of_unknown_artifact_fail() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-r", "project/a", "artifact3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("artifact3"));
}

#[test]
fn tags_sorted() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-t", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout("t1\nt2\n");
}

#[test]
fn tags_of_untagged_artifact_are_empty() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-t", "project/a", "artifact2"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn tags_of_unknown_namespace_fail() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-t", "unknown/ns", "artifact1"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn tags_of_unknown_artifact_fail() {
    let store = seeded();
    store
        .cmd()
        .args(["list", "-t", "project/a", "artifact3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("artifact3"));
}

#[test]
fn list_without_root_configuration_fails() {
    let store = seeded();
    store
        .cmd()
        .env_remove("ARTIFACT_STORE_ROOT")
        .args(["list", "-n"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ARTIFACT_STORE_ROOT"));
}
