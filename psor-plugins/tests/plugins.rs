//! End-to-end runs of the plugin binaries: exact stdout line and exit code.

use std::path::PathBuf;
use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    command(bin).args(args).output().expect("failed to spawn plugin")
}

fn command(bin: &str) -> Command {
    let mut cmd = Command::new(bin);
    cmd.env_remove("PSOR_CONFIG")
        .env("PSOR_LOG", "off")
        .current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn temp_config(name: &str, yaml: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("psor-{name}-{}.yaml", std::process::id()));
    std::fs::write(&path, yaml).unwrap();
    path
}

const BLOCK: &str = env!("CARGO_BIN_EXE_block-ip-address");
const UNBLOCK: &str = env!("CARGO_BIN_EXE_unblock-ip-address");
const ISOLATE: &str = env!("CARGO_BIN_EXE_isolate-endpoint");
const UNISOLATE: &str = env!("CARGO_BIN_EXE_unisolate-endpoint");
const REVOKE: &str = env!("CARGO_BIN_EXE_revoke-iam-key");
const LOG: &str = env!("CARGO_BIN_EXE_log-message");

#[test]
fn block_success_line() {
    let output = run(BLOCK, &["ip_address=10.0.0.5"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"success\", \"message\":\"Successfully submitted block rule for IP address '10.0.0.5'.\", \"details\":{\"ip_address\":\"10.0.0.5\"}}\n"
    );
    assert!(stderr(&output).contains("*** SIMULATION: Would add block rule for IP '10.0.0.5' ***"));
}

#[test]
fn block_without_arguments() {
    let output = run(BLOCK, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"error\", \"message\":\"Missing parameter: ip_address\"}\n"
    );
    assert!(!stderr(&output).contains("SIMULATION"));
}

#[test]
fn flags_are_ignored_not_interpreted() {
    let output = run(BLOCK, &["--help", "-V"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"error\", \"message\":\"Missing parameter: ip_address\"}\n"
    );
}

#[test]
fn block_accepts_host_names_and_ranges() {
    let output = run(BLOCK, &["ip_address=fw-host.example.com"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"success\", \"message\":\"Successfully submitted block rule for IP address 'fw-host.example.com'.\", \"details\":{\"ip_address\":\"fw-host.example.com\"}}\n"
    );

    let output = run(BLOCK, &["ip_address=10.0.0.0/24"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn unblock_accepts_host_names() {
    let output = run(UNBLOCK, &["ip_address=fw-host.example.com"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"success\", \"message\":\"Successfully submitted request to UNBLOCK IP address 'fw-host.example.com'.\", \"details\":{\"ip_address\":\"fw-host.example.com\"}}\n"
    );
}

#[test]
fn block_requires_literal_when_configured() {
    let output = command(BLOCK)
        .env("PSOR_FIREWALL__REQUIRE_IP_LITERAL", "true")
        .arg("ip_address=localhost")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"error\", \"message\":\"Invalid parameter: ip_address ('localhost' is not an IP address)\"}\n"
    );
}

#[test]
fn block_refused_by_protected_network() {
    let path = temp_config("protected", "firewall:\n  protected_networks: [\"10.0.0.0/8\"]\n");
    let output = command(BLOCK)
        .env("PSOR_CONFIG", &path)
        .arg("ip_address=10.0.0.5")
        .output()
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"error\", \"message\":\"Action blocked by safety policy: 10.0.0.5 is inside protected network 10.0.0.0/8\"}\n"
    );
}

#[test]
fn missing_config_file_is_exit_78() {
    let output = command(BLOCK)
        .env("PSOR_CONFIG", "/nonexistent/psor.yaml")
        .arg("ip_address=10.0.0.5")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(78));

    let line: serde_json::Value = serde_json::from_str(stdout(&output).trim_end()).unwrap();
    assert_eq!(line["status"], "error");
    assert_eq!(
        line["message"],
        "Configuration error: Configuration file not found: /nonexistent/psor.yaml"
    );
}

#[test]
fn unblock_is_idempotent() {
    let first = run(UNBLOCK, &["ip_address=10.0.0.5"]);
    let second = run(UNBLOCK, &["ip_address=10.0.0.5"]);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        stdout(&first),
        "{\"status\":\"success\", \"message\":\"Successfully submitted request to UNBLOCK IP address '10.0.0.5'.\", \"details\":{\"ip_address\":\"10.0.0.5\"}}\n"
    );
}

#[test]
fn first_duplicate_wins_on_the_command_line() {
    let output = run(UNBLOCK, &["ip_address=192.0.2.1", "ip_address=192.0.2.2"]);
    assert_eq!(
        stdout(&output),
        "{\"status\":\"success\", \"message\":\"Successfully submitted request to UNBLOCK IP address '192.0.2.1'.\", \"details\":{\"ip_address\":\"192.0.2.1\"}}\n"
    );
}

#[test]
fn isolate_and_unisolate() {
    let output = run(ISOLATE, &["endpoint_id=web-01"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"success\", \"message\":\"Successfully submitted network isolation request for endpoint 'web-01'.\", \"details\":{\"endpoint_id\":\"web-01\"}}\n"
    );

    let output = run(UNISOLATE, &["endpoint_id=web-01"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"success\", \"message\":\"Successfully submitted request to UNISOLATE endpoint 'web-01'.\", \"details\":{\"endpoint_id\":\"web-01\"}}\n"
    );
}

#[test]
fn revoke_files_ticket_in_env_project() {
    let output = command(REVOKE)
        .env("PSOR_TICKETING__PROJECT_KEY", "OPS")
        .arg("key_id=AKIAEXAMPLE")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let line: serde_json::Value = serde_json::from_str(stdout(&output).trim_end()).unwrap();
    assert_eq!(
        line["message"],
        "Successfully submitted request to revoke IAM key 'AKIAEXAMPLE'."
    );
    assert_eq!(line["details"]["key_id"], "AKIAEXAMPLE");
    assert!(line["details"]["jira_ticket"].as_str().unwrap().starts_with("OPS-"));
}

#[test]
fn revoke_simulated_outage() {
    let output = run(REVOKE, &["key_id=FAIL"]);
    assert_eq!(output.status.code(), Some(127));
    assert_eq!(
        stdout(&output),
        "{\"status\":\"error\", \"message\":\"Simulated failure: Could not connect to AWS API.\"}\n"
    );
    assert!(stderr(&output).contains("Connection to AWS endpoint failed"));
}

#[test]
fn log_message_escapes_output() {
    let output = run(LOG, &["message=line one\nline \"two\""]);
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    let line: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
    assert_eq!(
        line["message"],
        "Successfully logged message: 'line one\nline \"two\"'"
    );
    assert_eq!(line["details"]["message"], "line one\nline \"two\"");
}
