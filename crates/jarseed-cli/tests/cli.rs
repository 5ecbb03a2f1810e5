//! Exit codes and output streams of the jarseed binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn jarseed(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jarseed").unwrap();
    cmd.current_dir(work_dir.path()).env("RUST_LOG", "off");
    cmd
}

#[test]
fn missing_dependencies_exits_with_1() {
    let temp = TempDir::new().unwrap();

    jarseed(&temp)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Missing required parameter: -d|--dependencies.",
        ));
}

#[test]
fn malformed_dependency_exits_with_1() {
    let temp = TempDir::new().unwrap();

    jarseed(&temp)
        .args(["-d", "not-a-coordinate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid dependency coordinate"));
}

#[test]
fn missing_maven_exits_with_3() {
    let temp = TempDir::new().unwrap();

    jarseed(&temp)
        .args(["-d", "org.slf4j:slf4j-api:1.7.36"])
        .args(["--maven", "jarseed-missing-maven-binary"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("jarseed-missing-maven-binary"));
}

#[test]
fn seed_is_checked_before_tool() {
    let temp = TempDir::new().unwrap();

    jarseed(&temp)
        .args(["--maven", "jarseed-missing-maven-binary"])
        .assert()
        .code(1);
}

#[test]
fn broken_config_file_exits_with_1() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("jarseed.toml"), "[source\n").unwrap();

    jarseed(&temp)
        .args(["-d", "org.slf4j:slf4j-api:1.7.36"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("jarseed.toml"));
}

#[test]
fn help_lists_options() {
    let temp = TempDir::new().unwrap();

    jarseed(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dependencies"))
        .stdout(predicate::str::contains("--rtc-version"));
}

/// Stand-in installer that prints like Maven does and succeeds.
#[cfg(unix)]
fn fake_maven(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("mvn");
    std::fs::write(&path, "#!/bin/sh\necho \"[INFO] BUILD SUCCESS\"\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn json_report_is_the_only_stdout() {
    let temp = TempDir::new().unwrap();
    let libs = temp.path().join("libs");
    std::fs::create_dir(&libs).unwrap();
    std::fs::write(libs.join("org.eclipse.core.runtime.jar"), b"jar").unwrap();
    let maven = fake_maven(temp.path());

    let output = jarseed(&temp)
        .args(["-d", "org.slf4j:slf4j-api:1.7.36"])
        .args(["-l", "libs", "-r", "repo", "-w", "."])
        .arg("--maven")
        .arg(&maven)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["schema_version"], 1);
    assert_eq!(report["installed"][0]["artifact_id"], "runtime");
    assert_eq!(report["descriptor"]["artifact_id"], "rtc-java-api");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("[INFO] BUILD SUCCESS").count(), 2);
    assert!(temp.path().join("rtc-java-api").join("pom.xml").is_file());
}
