use predicates::str::contains;
use std::fs;

mod common;
use common::{abv, names_in_order, stdout_of, temp_path, write_fixture};

#[test]
fn test_init_writes_config() {
    let conf = temp_path("init", "conf");

    abv()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("front-end-kata.brighthr.workers.dev/api"));
    assert!(content.contains("timeout_secs: 10"));

    abv()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_config_print_shows_overrides() {
    let conf = temp_path("print", "conf");
    abv()
        .args([
            "--config",
            &conf,
            "--api-url",
            "http://localhost:9999/api",
            "config",
            "--print",
        ])
        .assert()
        .success()
        .stdout(contains("api_base_url"))
        .stdout(contains("localhost:9999/api"));
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let conf = temp_path("bad_url", "conf");
    abv()
        .args([
            "--config",
            &conf,
            "--api-url",
            "ftp://nope",
            "config",
            "--print",
        ])
        .assert()
        .failure()
        .stderr(contains("api_base_url must be an http(s) URL"));
}

#[test]
fn test_default_sort_from_config() {
    let src = write_fixture(
        "cfg_sort",
        r#"[
          { "id": 1, "employee": { "id": "a", "firstName": "Ann", "lastName": "X" },
            "absenceType": "SICKNESS", "startDate": "2024-01-01", "days": 1, "approved": true },
          { "id": 2, "employee": { "id": "b", "firstName": "Ben", "lastName": "Y" },
            "absenceType": "SICKNESS", "startDate": "2024-02-01", "days": 1, "approved": true }
        ]"#,
    );
    let conf = temp_path("cfg_sort", "conf");
    fs::write(
        &conf,
        "default_sort: startDate:desc\nseparator_char: \"=\"\ncolor: false\n",
    )
    .unwrap();

    let out = stdout_of(abv().args(["--config", &conf, "--source", &src, "list"]));
    assert_eq!(names_in_order(&out), ["Ben Y", "Ann X"]);
    assert!(out.contains("Start Date ↓"));
    assert!(out.contains("=========="));

    // --sort wins over the configured default
    let out = stdout_of(abv().args([
        "--config", &conf, "--source", &src, "list", "--sort", "name",
    ]));
    assert_eq!(names_in_order(&out), ["Ann X", "Ben Y"]);
}

#[test]
fn test_malformed_config_file() {
    let conf = temp_path("malformed_yaml", "conf");
    fs::write(&conf, "color: [\n").unwrap();
    abv()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration file"));
}
