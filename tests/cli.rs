//! Integration tests for top-level CLI behavior.

mod support;

use std::process::Command;

use support::GitFixture;

fn relnotes(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relnotes"));
    cmd.args(args);
    // Keep any developer .env and credentials out of the run.
    cmd.current_dir(std::env::temp_dir());
    for var in [
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "JIRA_SERVER_URL",
        "JIRA_USER_EMAIL",
        "JIRA_API_TOKEN",
        "TEAMS_WEBHOOK_URL",
        "RELNOTES_RECORD",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn run(args: &[&str]) -> std::process::Output {
    relnotes(args).output().expect("failed to run relnotes binary")
}

#[test]
fn help_lists_subcommands() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for sub in ["generate", "snapshot", "check"] {
        assert!(stdout.contains(sub), "help is missing {sub}");
    }
}

#[test]
fn generate_help_shows_options() {
    let output = run(&["generate", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--repo-path"));
    assert!(stdout.contains("--jira-project-key"));
    assert!(stdout.contains("--send-to-teams"));
}

#[test]
fn unknown_subcommand_fails() {
    let output = run(&["publish"]);
    assert!(!output.status.success());
}

#[test]
fn check_lists_missing_variables() {
    let output = run(&["check"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains(
        "missing required environment variables: GEMINI_API_KEY, JIRA_SERVER_URL, JIRA_USER_EMAIL, JIRA_API_TOKEN"
    ));
}

#[test]
fn generate_without_credentials_fails_before_touching_repo() {
    let repo = GitFixture::init();
    repo.write("a.txt", "a\n");
    repo.commit("first");

    let path = repo.path().to_str().unwrap();
    let output = run(&["generate", "--repo-path", path, "--jira-project-key", "SCRUM"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("GEMINI_API_KEY"));
}

#[test]
fn snapshot_of_plain_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["snapshot", "--repo-path", dir.path().to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("not a git repository"));
}

#[test]
fn snapshot_json_describes_last_commit() {
    let repo = GitFixture::init();
    repo.write("src/lib.rs", "pub fn a() {}\n");
    repo.commit("first");
    repo.write("src/lib.rs", "pub fn a() {}\npub fn b() {}\n");
    let head = repo.commit("second");

    let output = run(&["snapshot", "--repo-path", repo.path().to_str().unwrap(), "--json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["branch"], "main");
    assert_eq!(value["commit"], head.as_str());
    assert_eq!(value["diff"]["kind"], "changes");
    assert!(value["diff"]["text"].as_str().unwrap().contains("+pub fn b() {}"));
    assert_eq!(value["snapshot"]["files"][0]["path"], "src/lib.rs");
}

#[test]
fn snapshot_summary_reports_root_commit() {
    let repo = GitFixture::init();
    repo.write("a.txt", "a\n");
    repo.commit("first");

    let output = run(&["snapshot", "--repo-path", repo.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("none (root commit)"));
    assert!(stdout.contains("1 file(s)"));
}
