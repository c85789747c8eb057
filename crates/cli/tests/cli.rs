use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn clinic() -> Command {
    let mut cmd = Command::cargo_bin("clinic").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("CLINIC_SITE_VARIANT");
    cmd
}

#[test]
fn pages_lists_every_view() {
    clinic()
        .arg("pages")
        .assert()
        .success()
        .stdout(contains("home"))
        .stdout(contains("treatments"))
        .stdout(contains("testimonials"))
        .stdout(contains("Book Appointment"));
}

#[test]
fn resolve_unknown_falls_back_to_home() {
    clinic()
        .args(["resolve", "bogus-page"])
        .assert()
        .success()
        .stdout(contains("-> home"))
        .stdout(contains("falls back"));
}

#[test]
fn resolve_is_case_sensitive() {
    clinic()
        .args(["resolve", "Treatments"])
        .assert()
        .success()
        .stdout(contains("-> home"));
}

#[test]
fn export_to_stdout_defaults_to_toml() {
    clinic()
        .arg("export")
        .assert()
        .success()
        .stdout(contains("schema_version = 1"))
        .stdout(contains("Shree Sai Clinic"));
}

#[test]
fn export_then_validate_round_trip() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("sites/aesthetics.json");

    clinic()
        .args(["export", "--variant", "aesthetics", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Wrote aesthetics"));
    assert!(fs::read_to_string(&out).unwrap().contains("\"schema_version\""));

    clinic()
        .arg("validate")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("1 file(s) valid"));
}

#[test]
fn validate_reports_invalid_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.toml");

    clinic()
        .args(["export", "--output"])
        .arg(&path)
        .assert()
        .success();
    let text = fs::read_to_string(&path)
        .unwrap()
        .replace("info@careclinic.com", "not-an-email");
    fs::write(&path, text).unwrap();

    clinic()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("error:"))
        .stdout(contains("1 of 1 file(s) invalid"));
}

#[test]
fn validate_reports_unparsable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    clinic()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("broken.json (unreadable)"));
}

#[test]
fn validate_missing_path_is_an_error() {
    clinic()
        .args(["validate", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn info_summarizes_variant() {
    clinic()
        .args(["info", "--variant", "aesthetics"])
        .assert()
        .success()
        .stdout(contains("Radiance Skin & Aesthetics"))
        .stdout(contains("featured"));
}

#[test]
fn unknown_variant_is_rejected() {
    clinic()
        .args(["info", "--variant", "dentist"])
        .assert()
        .failure()
        .stderr(contains("dentist").and(contains("variant")));
}

#[test]
fn export_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site.yaml");

    clinic()
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("Unsupported content format"));
    assert!(!out.exists());
}

#[test]
fn export_format_flag_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site.yaml");

    clinic()
        .args(["export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("\"schema_version\""));
}
