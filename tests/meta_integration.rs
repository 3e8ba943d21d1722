//! Integration tests for the `meta` command.

mod common;

use predicates::prelude::*;

use common::TestStore;

/// Revision 1 carries `a=1, b=test`; revision 2 has no user metadata.
fn seeded() -> TestStore {
    let store = TestStore::new();
    store
        .cmd()
        .args(["store", "-r", "1", "-t", "t2", "-m", "a=1", "-m", "b=test"])
        .args(["project/a", "artifact1"])
        .arg(store.data_path())
        .assert()
        .success();
    store
        .cmd()
        .args(["store", "-r", "2", "-t", "t1", "project/a", "artifact1"])
        .arg(store.data_path())
        .assert()
        .success();
    store
}

#[test]
fn empty_user_metadata_prints_empty_object() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-r", "2", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn basic_metadata_prints_sorted_and_indented() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout("{\n  \"a\": \"1\",\n  \"b\": \"test\"\n}\n");
}

#[test]
fn delete_key_persists() {
    let store = seeded();
    let expected = "{\n  \"b\": \"test\"\n}\n";

    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1", "a="])
        .assert()
        .success()
        .stdout(expected);

    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn delete_all_keys_yields_empty_object() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1", "a=", "b="])
        .assert()
        .success()
        .stdout("{}\n");

    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn delete_then_re_add_applies_in_order() {
    let store = seeded();
    let expected = "{\n  \"a\": \"2\",\n  \"b\": \"test\"\n}\n";

    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1", "a=", "a=2"])
        .assert()
        .success()
        .stdout(expected);

    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn add_new_keys() {
    let store = seeded();
    let expected = "{\n  \"a\": \"2\",\n  \"b\": \"test\",\n  \"c\": \"hello\"\n}\n";

    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1", "c=hello", "a=2"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn hidden_flag_includes_reserved_keys() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-H", "-r", "1", "project/a", "artifact1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"__API__\": \"1\""))
        .stdout(predicate::str::contains("\"__created_at\": "))
        .stdout(predicate::str::contains("\"a\": \"1\""));
}

#[test]
fn reserved_keys_cannot_be_edited() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-H", "-r", "1", "project/a", "artifact1"])
        .args(["__API__=99", "__created_at="])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"__API__\": \"1\""))
        .stdout(predicate::str::contains("\"__created_at\": "));
}

#[test]
fn unknown_revision_fails() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact_unknown"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn invalid_edit_token_fails() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1", "invalidmeta"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalidmeta"));
}

#[test]
fn deleting_unknown_key_is_a_noop() {
    let store = seeded();
    store
        .cmd()
        .args(["meta", "-r", "1", "project/a", "artifact1", "unknownkey="])
        .assert()
        .success()
        .stdout("{\n  \"a\": \"1\",\n  \"b\": \"test\"\n}\n");
}
