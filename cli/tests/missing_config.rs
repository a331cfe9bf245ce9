use assert_cmd::Command;
use predicates::prelude::*;

const REQUIRED: [&str; 3] = ["JIRA_EMAIL", "JIRA_API_TOKEN", "SLACK_WEBHOOK_URL"];

fn report_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pmo-report").unwrap();
    cmd.env_clear();
    cmd
}

#[test]
fn exits_with_one_when_nothing_is_configured() {
    report_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Summary:").not())
        .stderr(predicate::str::contains("Make sure JIRA_EMAIL"));
}

#[test]
fn exits_with_one_when_any_required_variable_is_missing() {
    for missing in REQUIRED {
        let mut cmd = report_cmd();
        for name in REQUIRED.iter().filter(|name| **name != missing) {
            // Unroutable address: a network call here would fail, not hang.
            cmd.env(name, "http://127.0.0.1:9/unused");
        }
        cmd.args(["--mode", "weekly"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(missing).and(predicate::str::contains("Missing required")));
    }
}

#[test]
fn empty_value_counts_as_missing() {
    report_cmd()
        .env("JIRA_EMAIL", "pmo@example.com")
        .env("JIRA_API_TOKEN", "")
        .env("SLACK_WEBHOOK_URL", "https://hooks.example.com/x")
        .assert()
        .code(1);
}

/// Required settings pointing at a closed local port, so a run finishes fast
/// with both the fetch and the chat post failing.
fn configured_cmd() -> Command {
    let mut cmd = report_cmd();
    cmd.env("JIRA_EMAIL", "pmo@example.com")
        .env("JIRA_API_TOKEN", "token")
        .env("JIRA_DOMAIN", "http://127.0.0.1:9")
        .env("SLACK_WEBHOOK_URL", "http://127.0.0.1:9/hook");
    cmd
}

#[test]
fn stray_positional_argument_runs_daily_report() {
    configured_cmd()
        .arg("weekly")
        .assert()
        .code(0)
        .stdout(
            predicate::str::contains("Ignoring unrecognised arguments")
                .and(predicate::str::contains("Mode: daily")),
        );
}

#[test]
fn unknown_flag_falls_back_to_defaults() {
    configured_cmd()
        .args(["--bogus", "value"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Mode: daily"));
}

#[test]
fn delivery_failures_do_not_change_exit_code() {
    configured_cmd()
        .args(["--mode", "monthly"])
        .assert()
        .code(0)
        .stdout(
            predicate::str::contains("Unknown report mode, using daily")
                .and(predicate::str::contains("Chat: failed")),
        );
}
