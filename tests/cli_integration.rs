//! CLI integration tests for Coverprep.
//!
//! These tests drive the binary the way a build step would and check the
//! files it leaves behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the coverprep binary command.
fn coverprep() -> Command {
    let mut cmd = Command::cargo_bin("coverprep").unwrap();
    cmd.env_remove("COVERPREP_OUT_DIR");
    cmd
}

/// Create a temporary directory for test output.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

// ============================================================================
// coverprep pkgcfg
// ============================================================================

#[test]
fn test_pkgcfg_writes_json_config() {
    let tmp = temp_dir();
    let out = tmp.path().join("out");
    fs::create_dir(&out).unwrap();

    let output = coverprep()
        .args(["pkgcfg", "--pkg-path", "example.com/app", "--pkg-name", "app"])
        .arg("--out-dir")
        .arg(&out)
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let path = PathBuf::from(&lines[0]);
    assert!(path.file_name().unwrap().to_str().unwrap().starts_with("pkgcfg"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(r#""PkgPath":"example.com/app""#));
    assert!(content.contains(r#""PkgName":"app""#));
    assert!(content.contains(r#""Granularity":"perblock""#));
    assert!(content.contains(r#""Local":false"#));
}

#[test]
fn test_pkgcfg_out_dir_from_env() {
    let tmp = temp_dir();

    coverprep()
        .args(["pkgcfg", "--pkg-path", "a/b", "--pkg-name", "b"])
        .env("COVERPREP_OUT_DIR", tmp.path())
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgcfg"));

    assert_eq!(entries(tmp.path()), 1);
}

#[test]
fn test_pkgcfg_format_from_project_config() {
    let tmp = temp_dir();
    let out = tmp.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::create_dir(tmp.path().join(".coverprep")).unwrap();
    fs::write(
        tmp.path().join(".coverprep/config.toml"),
        "[pkgcfg]\nformat = \"toml\"\n",
    )
    .unwrap();

    let output = coverprep()
        .args(["pkgcfg", "--pkg-path", "a/b", "--pkg-name", "b"])
        .arg("--out-dir")
        .arg(&out)
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let content = fs::read_to_string(&stdout_lines(&output)[0]).unwrap();
    assert!(content.contains("PkgName = \"b\""));
}

#[test]
fn test_pkgcfg_missing_out_dir_fails() {
    let tmp = temp_dir();

    let output = coverprep()
        .args(["pkgcfg", "--pkg-path", "a/b", "--pkg-name", "b"])
        .arg("--out-dir")
        .arg(tmp.path().join("missing"))
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to generate coverage config"));
    assert!(stderr.contains("failed to create temporary file in"));
    // Each cause in the chain is printed once.
    assert_eq!(stderr.matches("os error").count(), 1);

    assert_eq!(entries(tmp.path()), 0);
}

#[test]
fn test_pkgcfg_requires_pkg_name() {
    let tmp = temp_dir();

    coverprep()
        .args(["pkgcfg", "--pkg-path", "a/b", "--out-dir"])
        .arg(tmp.path())
        .assert()
        .failure();
}

// ============================================================================
// coverprep outfilelist
// ============================================================================

#[test]
fn test_outfilelist_lists_cover_files() {
    let tmp = temp_dir();
    let out = tmp.path();

    let output = coverprep()
        .arg("outfilelist")
        .arg("--out-dir")
        .arg(out)
        .args(["main.go", "pkg/foo.go"])
        .current_dir(out)
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = PathBuf::from(&stdout_lines(&output)[0]);
    assert!(path.file_name().unwrap().to_str().unwrap().starts_with("outfilelist"));

    let expected = [
        out.join("covervars.go"),
        out.join("main.cover.go"),
        out.join("foo.cover.go"),
    ]
    .iter()
    .map(|p| p.display().to_string())
    .collect::<Vec<_>>()
    .join("\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_outfilelist_without_sources() {
    let tmp = temp_dir();

    let output = coverprep()
        .arg("outfilelist")
        .arg("--out-dir")
        .arg(tmp.path())
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let content = fs::read_to_string(&stdout_lines(&output)[0]).unwrap();
    assert_eq!(content, tmp.path().join("covervars.go").display().to_string());
}

// ============================================================================
// coverprep prepare
// ============================================================================

#[test]
fn test_prepare_prints_tool_flags() {
    let tmp = temp_dir();

    let output = coverprep()
        .args(["prepare", "--pkg-path", "example.com/app", "--pkg-name", "app"])
        .arg("--out-dir")
        .arg(tmp.path())
        .args(["main.go", "util.go"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "-pkgcfg");
    assert_eq!(lines[2], "-outfilelist");
    assert!(Path::new(&lines[1]).exists());
    assert!(Path::new(&lines[3]).exists());
    assert_eq!(entries(tmp.path()), 2);
}

#[test]
fn test_prepare_bad_config_fails() {
    let tmp = temp_dir();
    let config = tmp.path().join("bad.toml");
    fs::write(&config, "[pkgcfg]\nformat = \"yaml\"\n").unwrap();

    coverprep()
        .arg("--config")
        .arg(&config)
        .args(["prepare", "--pkg-path", "a", "--pkg-name", "a"])
        .arg("--out-dir")
        .arg(tmp.path())
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}
