use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(data_dir: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("rolo")
        .args(["--data-dir", data_dir.to_str().expect("data dir")])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(data_dir: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("rolo")
        .args(["--data-dir", data_dir.to_str().expect("data dir"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn run_cmd_err(data_dir: &Path, args: &[&str]) -> i32 {
    let output = cargo_bin_cmd!("rolo")
        .args(["--data-dir", data_dir.to_str().expect("data dir")])
        .args(args)
        .output()
        .expect("run command");
    assert!(!output.status.success(), "expected failure: {:?}", output);
    output.status.code().expect("exit code")
}

#[test]
fn cli_contact_lifecycle() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();

    run_cmd(
        dir,
        &[
            "add-contact",
            "--name",
            "Ada Lovelace",
            "--phone",
            "0501234567",
            "--birthday",
            "1990.12.10",
            "--email",
            "ada@analytical.engine",
        ],
    );

    let list = run_cmd_json(dir, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Ada Lovelace");
    assert_eq!(items[0]["phones"][0], "0501234567");
    assert_eq!(items[0]["birthday"], "1990.12.10");

    let hits = run_cmd_json(dir, &["search", "lovelace"]);
    assert_eq!(hits.as_array().expect("array").len(), 1);

    run_cmd(dir, &["rename-contact", "Ada Lovelace", "Ada King"]);
    let detail = run_cmd_json(dir, &["show", "Ada King"]);
    assert_eq!(detail["name"], "Ada King");
    assert_eq!(detail["email"], "ada@analytical.engine");

    run_cmd(dir, &["delete-contact", "Ada King"]);
    let list = run_cmd_json(dir, &["list"]);
    assert_eq!(list.as_array().expect("array").len(), 0);
}

#[test]
fn cli_phone_edits_persist_across_invocations() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();

    run_cmd(dir, &["add-contact", "--name", "Bob", "--phone", "1112223333"]);
    run_cmd(dir, &["add-phone", "Bob", "4445556666"]);
    run_cmd(dir, &["edit-phone", "Bob", "1112223333", "9998887777"]);
    run_cmd(dir, &["remove-phone", "Bob", "4445556666"]);

    let detail = run_cmd_json(dir, &["show", "Bob"]);
    let phones = detail["phones"].as_array().expect("array");
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0], "9998887777");
}

#[test]
fn cli_clear_field() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();

    run_cmd(
        dir,
        &["add-contact", "--name", "Eve", "--birthday", "1985.06.01"],
    );
    run_cmd(dir, &["clear-field", "Eve", "birthday"]);

    let detail = run_cmd_json(dir, &["show", "Eve"]);
    assert!(detail["birthday"].is_null());

    // Clearing an already-empty field reports not found.
    assert_eq!(run_cmd_err(dir, &["clear-field", "Eve", "birthday"]), 2);
}

#[test]
fn cli_exit_codes() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();

    // Unknown contact
    assert_eq!(run_cmd_err(dir, &["show", "Nobody"]), 2);
    // Invalid phone
    assert_eq!(
        run_cmd_err(dir, &["add-contact", "--name", "Zed", "--phone", "123"]),
        3
    );
    // Invalid birthday format
    assert_eq!(
        run_cmd_err(dir, &["add-contact", "--name", "Zed", "--birthday", "12.10.1990"]),
        3
    );
    // Query below the minimum length
    assert_eq!(run_cmd_err(dir, &["search", "ab"]), 3);
}

#[test]
fn cli_rename_to_taken_name_is_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();

    run_cmd(dir, &["add-contact", "--name", "One"]);
    run_cmd(dir, &["add-contact", "--name", "Two"]);
    assert_eq!(run_cmd_err(dir, &["rename-contact", "One", "Two"]), 3);
}

#[test]
fn cli_birthdays_within_window() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();

    run_cmd(
        dir,
        &["add-contact", "--name", "Soon", "--birthday", "1990.01.01"],
    );
    let upcoming = run_cmd_json(dir, &["birthdays", "--within", "365"]);
    let items = upcoming.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Soon");
    assert!(items[0]["days"].is_number());

    assert_eq!(run_cmd_err(dir, &["birthdays", "--within", "400"]), 3);
    assert_eq!(run_cmd_err(dir, &["birthdays", "--within", "0"]), 3);
}

#[test]
fn cli_note_lifecycle() {
    let temp = TempDir::new().expect("temp dir");
    let dir = temp.path();

    run_cmd(dir, &["add-note", "pick up parcel", "--tag", "errand"]);
    run_cmd(
        dir,
        &["add-note", "renew passport", "--tag", "errand", "--tag", "docs"],
    );

    let hits = run_cmd_json(dir, &["search-notes", "errand"]);
    assert_eq!(hits.as_array().expect("array").len(), 2);

    run_cmd(dir, &["edit-note", "docs", "renew passport soon"]);
    let all = run_cmd_json(dir, &["list-notes"]);
    let items = all.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert!(items
        .iter()
        .any(|n| n["content"] == "renew passport soon"));

    run_cmd(dir, &["delete-note", "errand"]);
    let all = run_cmd_json(dir, &["list-notes"]);
    assert_eq!(all.as_array().expect("array").len(), 0);

    assert_eq!(run_cmd_err(dir, &["delete-note", "errand"]), 2);
}
