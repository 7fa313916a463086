use assert_cmd::Command;
use predicates::prelude::*;

fn social(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("social").unwrap();
    cmd.arg("--store").arg(store);
    cmd
}

fn add_entry(store: &std::path::Path, content: &str, topic: &str) {
    social(store)
        .args(["calendar", "add", "-p", "twitter", "-c", content, "-t", topic])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added entry"));
}

fn stored_ids(store: &std::path::Path) -> Vec<String> {
    let raw = std::fs::read_to_string(store).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn add_then_list_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    add_entry(&store, "Borrow checker tips", "Rust");

    social(&store)
        .arg("calendar")
        .assert()
        .success()
        .stdout(predicates::str::contains("Content Calendar"))
        .stdout(predicates::str::contains("Twitter"))
        .stdout(predicates::str::contains("Rust: Borrow checker tips"));
}

#[test]
fn empty_calendar_prints_placeholder() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    social(&store)
        .arg("calendar")
        .assert()
        .success()
        .stdout(predicates::str::contains("No content entries found."));
}

#[test]
fn edit_updates_status_by_prefix() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    add_entry(&store, "Hello", "Greetings");
    let id = stored_ids(&store).remove(0);

    social(&store)
        .args(["edit", &id[..4], "--status", "published"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Updated entry"))
        .stdout(predicates::str::contains("published"));
}

#[test]
fn edit_without_changes_shows_detail() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    add_entry(&store, "Hello", "Greetings");
    let id = stored_ids(&store).remove(0);

    social(&store)
        .args(["edit", id.as_str()])
        .assert()
        .success()
        .stdout(predicates::str::contains("No changes specified."))
        .stdout(predicates::str::contains("Greetings"));
}

#[test]
fn delete_with_force_removes_entry() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    add_entry(&store, "Hello", "Greetings");
    let id = stored_ids(&store).remove(0);

    social(&store)
        .args(["delete", id.as_str(), "--force"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted entry"));

    social(&store)
        .arg("calendar")
        .assert()
        .success()
        .stdout(predicates::str::contains("No content entries found."));
}

#[test]
fn delete_can_be_cancelled() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    add_entry(&store, "Hello", "Greetings");
    let id = stored_ids(&store).remove(0);

    social(&store)
        .args(["delete", id.as_str()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Cancelled."));

    assert_eq!(stored_ids(&store).len(), 1);
}

#[test]
fn unknown_id_fails_with_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    social(&store)
        .args(["edit", "nonexistent", "--status", "draft"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No entry found with ID"));
}

#[test]
fn platforms_lists_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    social(&store)
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicates::str::contains("Twitter / X"))
        .stdout(predicates::str::contains("280"))
        .stdout(predicates::str::contains("LinkedIn"));
}

#[test]
fn week_view_shows_entries_scheduled_this_week() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    let today = chrono::Local::now().date_naive().to_string();
    social(&store)
        .args([
            "calendar", "add", "-p", "linkedin", "-c", "We ship today", "-t", "Launch",
        ])
        .args(["-s", today.as_str(), "--status", "scheduled"])
        .assert()
        .success();

    social(&store)
        .args(["calendar", "--week"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Week of"))
        .stdout(predicates::str::contains("Launch"));
}

#[test]
fn generate_without_api_key_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    social(&store)
        .env_remove("ANTHROPIC_API_KEY")
        .args(["generate", "-p", "twitter", "-t", "Rust"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("API key not set"));
}

#[test]
fn filtered_list_excludes_other_platforms() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("content.json");

    add_entry(&store, "tweet", "Rust");
    social(&store)
        .args([
            "calendar", "add", "-p", "linkedin", "-c", "post", "-t", "Hiring",
        ])
        .assert()
        .success();

    social(&store)
        .args(["calendar", "-p", "linkedin"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Hiring"))
        .stdout(predicates::str::contains("Rust").not());
}
