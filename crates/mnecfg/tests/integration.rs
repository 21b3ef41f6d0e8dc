//! End-to-end CLI integration tests for the `mnecfg` binary.
//!
//! Each test points the binary at its own temporary home through
//! `_MNE_FAKE_HOME_DIR` and clears the variables it reads, so the host
//! environment never leaks in.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Variables that would otherwise change what the binary sees.
const SCRUBBED: &[&str] = &[
    "MNECFG_HOME",
    "MNE_DONTWRITE_HOME",
    "MNE_DATA",
    "MNE_LOGGING_LEVEL",
    "MNE_CACHE_DIR",
    "MNE_MEMMAP_MIN_SIZE",
    "MNE_STIM_CHANNEL_5",
    "MY_CUSTOM_KEY",
    "SUBJECTS_DIR",
];

/// Build a `Command` for the `mnecfg` binary with a scrubbed environment and
/// no home override.
fn mnecfg_unrooted() -> Command {
    let mut cmd = Command::cargo_bin("mnecfg").unwrap();
    for key in SCRUBBED {
        cmd.env_remove(key);
    }
    cmd.env_remove("_MNE_FAKE_HOME_DIR").env("NO_COLOR", "1");
    cmd
}

/// Build a `Command` for the `mnecfg` binary rooted at `home`.
fn mnecfg(home: &Path) -> Command {
    let mut cmd = mnecfg_unrooted();
    cmd.env("_MNE_FAKE_HOME_DIR", home);
    cmd
}

fn config_file(home: &Path) -> PathBuf {
    home.join(".mne").join("mne-python.json")
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// get / set / unset
// ---------------------------------------------------------------------------

#[test]
fn set_then_get_round_trip() {
    let home = TempDir::new().unwrap();

    mnecfg(home.path())
        .args(["set", "MNE_DATA", "/data/mne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set MNE_DATA = /data/mne"));

    mnecfg(home.path())
        .args(["get", "MNE_DATA"])
        .assert()
        .success()
        .stdout("/data/mne\n");

    let written = fs::read_to_string(config_file(home.path())).unwrap();
    assert_eq!(written, "{\n\"MNE_DATA\": \"/data/mne\"\n}");
}

#[test]
fn unset_removes_the_key() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .args(["set", "MNE_LOGGING_LEVEL", "info"])
        .assert()
        .success();
    mnecfg(home.path())
        .args(["unset", "MNE_LOGGING_LEVEL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unset MNE_LOGGING_LEVEL"));

    mnecfg(home.path())
        .args(["get", "MNE_LOGGING_LEVEL"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(
        fs::read_to_string(config_file(home.path())).unwrap(),
        "{}"
    );
}

#[test]
fn environment_wins_unless_disabled() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .args(["set", "MNE_DATA", "from_file"])
        .assert()
        .success();

    mnecfg(home.path())
        .env("MNE_DATA", "from_env")
        .args(["get", "MNE_DATA"])
        .assert()
        .success()
        .stdout("from_env\n");

    mnecfg(home.path())
        .env("MNE_DATA", "from_env")
        .args(["get", "MNE_DATA", "--no-env"])
        .assert()
        .success()
        .stdout("from_file\n");
}

#[test]
fn get_default_and_strict() {
    let home = TempDir::new().unwrap();

    mnecfg(home.path())
        .args(["get", "MNE_DATA", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");

    mnecfg(home.path())
        .args(["get", "MNE_DATA", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("MNE_DATA"));
}

#[test]
fn get_json_reports_null_for_missing() {
    let home = TempDir::new().unwrap();
    let json = stdout_json(mnecfg(home.path()).args(["get", "MNE_DATA", "--json"]));
    assert_eq!(json["key"], "MNE_DATA");
    assert!(json["value"].is_null());
}

#[test]
fn strict_error_in_json_mode() {
    let home = TempDir::new().unwrap();
    let output = mnecfg(home.path())
        .args(["get", "MNE_DATA", "--strict", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(err["error"].as_str().unwrap().contains("MNE_DATA"));
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

#[test]
fn unknown_key_warns_but_is_written() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .args(["set", "MY_CUSTOM_KEY", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: setting non-standard config type: \"MY_CUSTOM_KEY\"",
        ));

    mnecfg(home.path())
        .args(["get", "MY_CUSTOM_KEY"])
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn wildcard_key_does_not_warn() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .args(["set", "MNE_STIM_CHANNEL_5", "STI 101"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning").not());
}

#[test]
fn warnings_are_plain_when_stderr_is_piped() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR")
        .env_remove("CLICOLOR_FORCE")
        .env("TERM", "xterm-256color")
        .args(["set", "MY_CUSTOM_KEY", "x"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("warning: "))
        .stderr(predicate::str::contains("\u{1b}[").not());

    mnecfg(home.path())
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR")
        .env("CLICOLOR_FORCE", "1")
        .env("TERM", "xterm-256color")
        .args(["set", "MY_CUSTOM_KEY", "y"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}["));
}

#[test]
fn quiet_suppresses_warnings() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .args(["-q", "set", "MY_CUSTOM_KEY", "x"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

// ---------------------------------------------------------------------------
// Corrupt file
// ---------------------------------------------------------------------------

#[test]
fn corrupt_file_fails_writes_and_warns_on_reads() {
    let home = TempDir::new().unwrap();
    let path = config_file(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();

    mnecfg(home.path())
        .args(["set", "MNE_DATA", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid JSON file"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");

    mnecfg(home.path())
        .args(["get", "MNE_DATA", "--default", "d"])
        .assert()
        .success()
        .stdout("d\n")
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("might be corrupted"));
}

// ---------------------------------------------------------------------------
// list / keys / path
// ---------------------------------------------------------------------------

#[test]
fn list_shows_every_stored_value() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .args(["set", "MNE_DATA", "/d"])
        .assert()
        .success();
    mnecfg(home.path())
        .args(["set", "MNE_LOGGING_LEVEL", "debug"])
        .assert()
        .success();

    let json = stdout_json(mnecfg(home.path()).args(["list", "--json", "--no-env"]));
    assert_eq!(
        json,
        serde_json::json!({"MNE_DATA": "/d", "MNE_LOGGING_LEVEL": "debug"})
    );

    mnecfg(home.path())
        .args(["list", "--no-env"])
        .assert()
        .success()
        .stdout("MNE_DATA=/d\nMNE_LOGGING_LEVEL=debug\n");
}

#[test]
fn list_overlays_environment() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .args(["set", "MNE_DATA", "/d"])
        .assert()
        .success();

    let json = stdout_json(
        mnecfg(home.path())
            .env("MNE_DATA", "/env")
            .env("MNE_LOGGING_LEVEL", "error")
            .args(["list", "--json"]),
    );
    assert_eq!(json["MNE_DATA"], "/env");
    assert_eq!(json["MNE_LOGGING_LEVEL"], "error");
}

#[test]
fn keys_lists_known_keys_and_wildcards() {
    let home = TempDir::new().unwrap();
    mnecfg(home.path())
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUBJECTS_DIR\n"))
        .stdout(predicate::str::contains("MNE_NIRS*\n"));

    let json = stdout_json(mnecfg(home.path()).args(["keys", "--json"]));
    let keys = json["keys"].as_array().unwrap();
    assert!(keys.iter().any(|k| k == "MNE_DATA"));
    assert!(json["wildcards"]
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w == "MNE_STIM_CHANNEL"));
}

#[test]
fn path_follows_fake_home_and_explicit_home() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();

    mnecfg(home.path())
        .arg("path")
        .assert()
        .success()
        .stdout(format!("{}\n", config_file(home.path()).display()));

    mnecfg(home.path())
        .args(["path", "--home"])
        .arg(other.path())
        .assert()
        .success()
        .stdout(format!("{}\n", config_file(other.path()).display()));

    let json = stdout_json(mnecfg(home.path()).args(["path", "--json"]));
    assert_eq!(json["exists"], false);
}

// ---------------------------------------------------------------------------
// subjects-dir and validated settings
// ---------------------------------------------------------------------------

#[test]
fn subjects_dir_is_validated() {
    let home = TempDir::new().unwrap();
    let subjects = TempDir::new().unwrap();

    mnecfg(home.path())
        .args(["subjects-dir"])
        .assert()
        .success()
        .stdout("");

    mnecfg(home.path())
        .args(["subjects-dir", "--strict"])
        .assert()
        .failure();

    mnecfg(home.path())
        .env("SUBJECTS_DIR", subjects.path())
        .arg("subjects-dir")
        .assert()
        .success()
        .stdout(format!("{}\n", subjects.path().display()));

    mnecfg(home.path())
        .arg("subjects-dir")
        .arg(subjects.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn cache_dir_and_memmap_settings() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();

    mnecfg(home.path())
        .arg("cache-dir")
        .arg(cache.path().join("missing"))
        .assert()
        .failure();

    mnecfg(home.path())
        .arg("cache-dir")
        .arg(cache.path())
        .assert()
        .success();
    mnecfg(home.path())
        .args(["memmap-min-size", "1M"])
        .assert()
        .success();
    mnecfg(home.path())
        .args(["memmap-min-size", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("memmap_min_size"));

    let json = stdout_json(mnecfg(home.path()).args(["list", "--json", "--no-env"]));
    assert_eq!(json["MNE_MEMMAP_MIN_SIZE"], "1M");
    assert_eq!(json["MNE_CACHE_DIR"], cache.path().to_str().unwrap());

    mnecfg(home.path())
        .args(["cache-dir", "--clear"])
        .assert()
        .success()
        .stdout("Unset MNE_CACHE_DIR\n");
    mnecfg(home.path())
        .args(["get", "MNE_CACHE_DIR"])
        .assert()
        .success()
        .stdout("");
}

// ---------------------------------------------------------------------------
// Temporary home
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn temp_home_is_removed_when_the_process_exits() {
    let json = stdout_json(
        mnecfg_unrooted()
            .env("MNE_DONTWRITE_HOME", "true")
            .args(["set", "MNE_DATA", "x", "--json"]),
    );
    let written = PathBuf::from(json["path"].as_str().unwrap());
    let temp_home = written.parent().unwrap().parent().unwrap();
    let name = temp_home.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("mne-home-"), "{name}");
    assert!(!written.exists());
    assert!(!temp_home.exists());

    let json = stdout_json(
        mnecfg_unrooted()
            .env("MNE_DONTWRITE_HOME", "true")
            .args(["path", "--json"]),
    );
    let path = PathBuf::from(json["path"].as_str().unwrap());
    assert_ne!(path, written);
    assert!(!path.parent().unwrap().parent().unwrap().exists());
}
