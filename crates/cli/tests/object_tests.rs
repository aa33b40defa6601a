//! Integration tests for `layered-config object` and `layered-config env-key`.

mod common;

use common::{layered_cmd, write_config};
use predicates::prelude::*;

#[test]
fn test_object_from_json_file() {
    let (_dir, path) = write_config(
        "config.json",
        r#"{"database": {"replica": {"host": "r1", "port": 5433}}}"#,
    );

    layered_cmd()
        .arg("--file")
        .arg(&path)
        .args(["--section", "database", "object", "replica"])
        .assert()
        .success()
        .stdout("{\"host\":\"r1\",\"port\":5433}\n");
}

#[test]
fn test_object_from_env_yaml() {
    layered_cmd()
        .env("cliTestsHosts", "[a, b]")
        .args(["object", "cliTestsHosts"])
        .assert()
        .success()
        .stdout("[\"a\",\"b\"]\n");
}

#[test]
fn test_object_unset_prints_null() {
    layered_cmd()
        .env_remove("cliTestsUnsetObject")
        .args(["object", "cliTestsUnsetObject"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_object_decode_failure_exit_code() {
    layered_cmd()
        .env("cliTestsBrokenObject", "{ \"a\": [1,")
        .args(["object", "cliTestsBrokenObject"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("cliTestsBrokenObject"));
}

#[test]
fn test_env_key_composition() {
    layered_cmd()
        .args(["-s", "app", "-s", "db", "env-key", "host"])
        .assert()
        .success()
        .stdout("app_db_host\n");
}
