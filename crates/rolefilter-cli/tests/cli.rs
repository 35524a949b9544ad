use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_directory(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("directory.yaml");
    std::fs::write(
        &path,
        r#"
projects:
  PLP:
    lead: alice
    members:
      alice: [Merchandiser]
      bob: [Buyer]
"#,
    )
    .unwrap();
    path
}

fn rolefilter() -> Command {
    let mut cmd = Command::cargo_bin("rolefilter").unwrap();
    cmd.env_remove("ROLEFILTER_DIRECTORY");
    cmd.env_remove("ROLEFILTER_USER");
    cmd
}

#[test]
fn resolve_prints_member_filters() {
    let dir = TempDir::new().unwrap();
    let path = write_directory(&dir);

    rolefilter()
        .args(["resolve", "PLP", "--user", "bob", "--directory"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "'Sample Purchase':'Information Gathering'",
        ))
        .stdout(predicate::str::contains(
            "'Initial PO Stage Wrap-Up':'Check List Verification'",
        ));
}

#[test]
fn resolve_lead_includes_synthetic_role_filters() {
    let dir = TempDir::new().unwrap();
    let path = write_directory(&dir);

    rolefilter()
        .args(["resolve", "PLP", "--user", "alice", "--directory"])
        .arg(&path)
        .assert()
        .success()
        // Merchandiser filter
        .stdout(predicate::str::contains(
            "'Market-end Feedback':'Information Gathering'",
        ))
        // Project Lead filter
        .stdout(predicate::str::contains(
            "'Market-end Feedback':'Approval Review'",
        ));
}

#[test]
fn resolve_without_arguments_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write_directory(&dir);

    rolefilter()
        .args(["resolve", "--user", "bob", "--directory"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong number of arguments"));
}

#[test]
fn resolve_unknown_project_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_directory(&dir);

    rolefilter()
        .args(["resolve", "NOPE", "--user", "bob", "--directory"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No filters."));
}

#[test]
fn resolve_json_emits_literals() {
    let dir = TempDir::new().unwrap();
    let path = write_directory(&dir);

    let output = rolefilter()
        .args(["resolve", "PLP", "--user", "bob", "--json", "--directory"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let tokens = parsed.as_array().unwrap();
    assert_eq!(tokens.len(), 50);
    assert_eq!(
        tokens[0]["literal"],
        "'Sample Purchase':'Information Gathering'"
    );
}

#[test]
fn roles_shows_synthetic_project_lead() {
    let dir = TempDir::new().unwrap();
    let path = write_directory(&dir);

    rolefilter()
        .args(["roles", "PLP", "--user", "alice", "--directory"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Merchandiser"))
        .stdout(predicate::str::contains("Project Lead"));

    rolefilter()
        .args(["roles", "PLP", "--user", "bob", "--directory"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Lead").not());
}

#[test]
fn table_prints_single_role() {
    rolefilter()
        .args(["table", "--role", "Editor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Instruction Manual"))
        .stdout(predicate::str::contains("Product Copy"));
}

#[test]
fn table_rejects_unknown_role() {
    rolefilter()
        .args(["table", "--role", "Astronaut"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role"));
}

#[test]
fn resolve_requires_a_directory() {
    rolefilter()
        .args(["resolve", "PLP", "--user", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no project directory"));
}
