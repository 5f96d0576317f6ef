use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

fn relay_content() -> Command {
    let mut cmd = Command::cargo_bin("relay-content").unwrap();
    cmd.env("RELAY_CONTENT_CONFIG", "/nonexistent/relay-content.toml")
        .env_remove("RELAY_CONTENT_LOG");
    cmd
}

#[test]
fn test_normalizes_chat_request_from_stdin() {
    let request = json!({
        "model": "gpt-4o",
        "messages": [
            {"role": "user", "content": [
                {"type": "text", "text": "What is this?"},
                {"type": "image_url", "image_url": {"url": "http://x"}},
                {"type": "video", "video": {}}
            ]}
        ]
    });

    let output = relay_content()
        .args(["--mode", "chat"])
        .write_stdin(request.to_string())
        .output()
        .unwrap();
    assert!(output.status.success());

    let normalized: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        normalized,
        json!({
            "model": "gpt-4o",
            "messages": [{
                "role": "user",
                "is_plain_text": false,
                "text": "What is this?",
                "parts": [
                    {"type": "text", "text": "What is this?"},
                    {"type": "image_url", "image_url": {"url": "http://x", "detail": "auto"}}
                ]
            }]
        })
    );
}

#[test]
fn test_normalizes_embeddings_request_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"model":"embed","input":["a",3,"b"]}}"#).unwrap();

    relay_content()
        .arg("--input")
        .arg(file.path())
        .args(["--mode", "embeddings"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""input":["a","b"]"#));
}

#[test]
fn test_rejects_malformed_request() {
    relay_content()
        .write_stdin("{\"messages\": [")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode request document"));
}

#[test]
fn test_rejects_invalid_log_level() {
    relay_content()
        .args(["--log-level", "relay_content=loud"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
