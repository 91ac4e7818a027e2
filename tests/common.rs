#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ABSENCES: &str = r#"[
  {
    "id": 1,
    "employee": { "id": "1", "firstName": "John", "lastName": "Doe" },
    "absenceType": "SICKNESS",
    "startDate": "2024-01-01",
    "days": 3,
    "approved": true
  },
  {
    "id": 2,
    "employee": { "id": "2", "firstName": "Jane", "lastName": "Doe" },
    "absenceType": "ANNUAL_LEAVE",
    "startDate": "2024-01-02T00:00:00.000Z",
    "days": 5,
    "approved": false
  },
  {
    "id": 3,
    "employee": { "id": "1", "firstName": "John", "lastName": "Doe" },
    "absenceType": "MEDICAL",
    "startDate": "2023-12-20",
    "days": 1,
    "approved": true
  }
]"#;

pub fn abv() -> Command {
    cargo_bin_cmd!("absview")
}

/// Path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_absview.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_fixture(name: &str, content: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, content).expect("write fixture");
    p
}

/// Command with an isolated (missing) config file, no colors and `--source`
pub fn abv_with_source(name: &str, absences: &str) -> Command {
    let conf = temp_path(name, "conf");
    let src = write_fixture(&format!("{name}_absences"), absences);
    let mut cmd = abv();
    cmd.args(["--config", &conf, "--no-color", "--source", &src]);
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().expect("run absview");
    assert!(out.status.success(), "absview failed: {:?}", out);
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

/// Line of the table that mentions `needle`
pub fn line_with<'a>(out: &'a str, needle: &str) -> &'a str {
    out.lines()
        .find(|l| l.contains(needle) && l.contains('|'))
        .unwrap_or_else(|| panic!("no table line with {needle:?} in:\n{out}"))
}

/// Row order of the table, by first cell
pub fn names_in_order(out: &str) -> Vec<String> {
    out.lines()
        .skip_while(|l| !l.starts_with("Name"))
        .skip(2)
        .take_while(|l| l.contains('|'))
        .map(|l| l.split('|').next().unwrap_or("").trim().to_string())
        .collect()
}
