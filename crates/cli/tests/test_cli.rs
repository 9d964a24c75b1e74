use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REPORT: &str = "\
CBMC version 5.12 64-bit x86_64 linux
** Results:
[main.c:7] pointer_dereference.1: NULL pointer dereference detected
Trace:
  main.c:6 p = NULL
  main.c:7 *p = 1

** 1 of 3 failed
VERIFICATION FAILED
";

fn canary() -> Command {
    let mut cmd = Command::cargo_bin("canary").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("PORT")
        .env_remove("CANARY_BIND")
        .env_remove("CANARY_ANALYZER")
        .env_remove("CANARY_TIMEOUT")
        .env_remove("CANARY_STATIC_DIR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cwe_table() {
    canary()
        .arg("cwe")
        .assert()
        .success()
        .stdout(predicate::str::contains("CWE-476"))
        .stdout(predicate::str::contains("division_by_zero"))
        .stdout(predicate::str::contains(
            "https://cwe.mitre.org/data/definitions/369.html",
        ));
}

#[test]
fn test_examples_listing_and_code() {
    canary()
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("circular_list"))
        .stdout(predicate::str::contains("use_after_free"));

    canary()
        .args(["examples", "double_free", "--code"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#include <stdlib.h>"))
        .stdout(predicate::str::contains("free(x);"));

    canary()
        .args(["examples", "no_such_example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown example"));
}

#[test]
fn test_parse_from_stdin_as_json() {
    let output = canary()
        .args(["parse", "-", "--format", "json"])
        .write_stdin(REPORT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["bugs"][0]["type"], "Pointer Dereference");
    assert_eq!(value["bugs"][0]["line"], "main.c:7");
    assert_eq!(value["bugs"][0]["trace"], "  main.c:6 p = NULL\n  main.c:7 *p = 1");
    assert_eq!(value["output"], REPORT);
}

#[test]
fn test_parse_file_as_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, REPORT).unwrap();

    canary()
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 bug(s) found"))
        .stdout(predicate::str::contains("[CWE-476]"));
}

#[cfg(unix)]
#[test]
fn test_analyze_with_stub_tool() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("fake-2ls.sh");
    fs::write(
        &script,
        "echo \"$@\"\necho VERIFICATION FAILED\n\
         echo '[main.c:3] main.memory_leak.1: dynamically allocated memory never freed'\n\
         exit 10\n",
    )
    .unwrap();

    let config = dir.path().join("canary.yaml");
    fs::write(
        &config,
        format!(
            "analyzer:\n  binary: /bin/sh\n  timeout_seconds: 10\n  extra_args: [\"{}\"]\n",
            script.display()
        ),
    )
    .unwrap();

    let source = dir.path().join("leak.c");
    fs::write(&source, "int main() { malloc(4); return 0; }\n").unwrap();

    let output = canary()
        .arg("analyze")
        .arg(&source)
        .arg("--config")
        .arg(&config)
        .args(["--memory-leak-check", "--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["bugs"][0]["type"], "Memory Leak");
    assert_eq!(value["bugs"][0]["cwe"], "401");
    assert!(value["output"]
        .as_str()
        .unwrap()
        .contains("--memory-leak-check"));
}

#[test]
fn test_analyze_missing_file() {
    canary()
        .args(["analyze", "/nonexistent/input.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_print_config_applies_flags() {
    canary()
        .args(["serve", "--print-config", "--bind", "0.0.0.0:9999", "--timeout", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:9999"))
        .stdout(predicate::str::contains("timeout_seconds: 7"));
}
