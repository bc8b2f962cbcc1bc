use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

fn frames_json() -> Value {
    json!([
        {"function": "get_trace", "class": "RedirectTrace", "type": "->", "file": "/srv/redirect.php", "line": 56},
        {"function": "redirect_headers", "class": "RedirectTrace", "type": "->"},
        {"function": "apply_filters", "file": "/srv/plugin.php", "line": 213},
        {"function": "wp_redirect", "file": "/srv/pluggable.php", "line": 1208, "args": ["/login", 302]},
        {"function": "auth_redirect", "file": "/srv/pluggable.php", "line": 1101},
        {"function": "require_once", "file": "/srv/wp-admin/admin.php", "line": 99, "args": ["/srv/wp-admin/admin.php", {"@type": "WP_User"}, null]}
    ])
}

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("redirect-trace").expect("binary")
}

#[test]
fn formats_file_input_as_plain_lines() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("frames.json");
    fs::write(&input, frames_json().to_string()).unwrap();

    let output = cli().arg(&input).output().expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("01: /srv/pluggable.php "));
    assert!(lines[0].ends_with(": 1101 auth_redirect()"));
    assert!(lines[1].ends_with(
        ":   99 require_once(\"/srv/wp-admin/admin.php\",[WP_User],NULL)"
    ));
}

#[test]
fn reads_stdin_and_emits_headers() {
    cli()
        .args(["--mode", "headers", "--skip", "5"])
        .write_stdin(frames_json().to_string())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WPDev-Redirect-Trace-01: /srv/wp-admin/admin.php"))
        .stdout(predicate::str::contains("Trace-02").not());
}

#[test]
fn comment_mode_uses_custom_prefix() {
    cli()
        .args(["-", "--mode", "comments", "--prefix", "trace-"])
        .write_stdin(frames_json().to_string())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\n<!-- trace-01: "))
        .stdout(predicate::str::contains("<!-- trace-02: "));
}

#[test]
fn json_mode_keys_by_sequence() {
    let output = cli()
        .args(["--mode", "json", "--skip", "0"])
        .write_stdin(frames_json().to_string())
        .output()
        .expect("run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let map = body.as_object().expect("object");
    assert_eq!(map.len(), 6);
    assert!(map["01"].as_str().unwrap().ends_with(" RedirectTrace->get_trace()"));
    assert!(map["04"]
        .as_str()
        .unwrap()
        .ends_with(" wp_redirect(\"/login\",302)"));
}

#[test]
fn config_file_controls_layout() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("trace.toml");
    fs::write(&config, "skip_frames = 0\nfile_width = 20\nkey_width = 3\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin(frames_json().to_string())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("001: /srv/redirect.php   :   56 "))
        .stdout(predicate::str::contains("006: ...p-admin/admin.php:   99 require_once("));
}

#[test]
fn invalid_input_fails() {
    cli()
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array of stack frames"));
}

#[test]
fn invalid_config_fails() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("bad.toml");
    fs::write(&config, "file_width = 2\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .write_stdin("[]")
        .assert()
        .failure();
}

#[test]
fn empty_stack_prints_nothing() {
    cli()
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
