use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(home: &Path, args: &[&str]) -> Output {
    let db_path = home.join("ringbook.sqlite3");
    cargo_bin_cmd!("ringbook")
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(home: &Path, args: &[&str]) -> String {
    let output = run_raw(home, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(home: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_raw(home, &full);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_add_log_show_flow() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    let added = run_cmd_json(
        home,
        &["add-contact", "--name", "Jane Doe", "--mobile", "+1 (555) 123-4567"],
    );
    let id = added["id"].as_str().expect("id").to_string();

    let list = run_cmd_json(home, &["list"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Jane Doe");
    assert_eq!(items[0]["logCount"], 0);

    let image = home.join("photo.png");
    fs::write(&image, b"\x89PNG").expect("write image");
    run_cmd(
        home,
        &[
            "log",
            &id,
            "--type",
            "whatsapp",
            "--comment",
            "sent the photo",
            "--image",
            image.to_str().expect("image path"),
        ],
    );

    let detail = run_cmd_json(home, &["show", &id]);
    let logs = detail["logs"].as_array().expect("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["type"], "WhatsApp");
    assert_eq!(logs[0]["comment"], "sent the photo");
    assert!(logs[0]["imageBase64"]
        .as_str()
        .expect("image payload")
        .starts_with("data:image/png;base64,"));
}

#[test]
fn cli_rejects_invalid_mobile_with_input_exit_code() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(
        temp.path(),
        &["add-contact", "--name", "Jane", "--mobile", "call me"],
    );
    assert_eq!(output.status.code(), Some(3));
    let list = run_cmd_json(temp.path(), &["list"]);
    assert!(list.as_array().expect("array").is_empty());
}

#[test]
fn cli_import_prepends_batch() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();
    run_cmd(home, &["add-contact", "--name", "C", "--mobile", "333"]);

    let csv = home.join("contacts.csv");
    fs::write(&csv, "A,111\nB,222\n").expect("write csv");
    let imported = run_cmd_json(home, &["import", csv.to_str().expect("csv path")]);
    assert_eq!(imported["imported"], 2);

    let list = run_cmd_json(home, &["list"]);
    let names: Vec<&str> = list
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn cli_import_rejects_bad_line() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();
    let csv = home.join("contacts.csv");
    fs::write(&csv, "A,111\nB,not-a-number\n").expect("write csv");

    let output = run_raw(home, &["import", csv.to_str().expect("csv path")]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}

#[test]
fn cli_list_management_flow() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();
    run_cmd(home, &["add-contact", "--name", "Ada", "--mobile", "111"]);

    let lists = run_cmd_json(home, &["lists", "ls"]);
    let original = lists[0]["id"].as_str().expect("id").to_string();
    assert_eq!(lists[0]["name"], "My Contacts");
    assert_eq!(lists[0]["active"], true);

    let refused = run_raw(home, &["lists", "rm", &original, "--yes"]);
    assert_eq!(refused.status.code(), Some(4));

    let copy = run_cmd_json(home, &["lists", "save-as", "Work"]);
    let copy_id = copy["id"].as_str().expect("id").to_string();
    assert_eq!(copy["contactCount"], 1);
    assert_eq!(copy["active"], false);

    let blank = run_raw(home, &["lists", "rename", &copy_id, "  "]);
    assert_eq!(blank.status.code(), Some(3));

    run_cmd(home, &["lists", "rename", &copy_id, "Clients"]);
    run_cmd(home, &["lists", "rm", &original, "--yes"]);

    let lists = run_cmd_json(home, &["lists", "ls"]);
    let lists = lists.as_array().expect("array");
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["name"], "Clients");
    assert_eq!(lists[0]["active"], true);
}

#[test]
fn cli_delete_requires_confirmation() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();
    let added = run_cmd_json(home, &["add-contact", "--name", "Ada", "--mobile", "111"]);
    let id = added["id"].as_str().expect("id").to_string();

    let unconfirmed = run_raw(home, &["delete-contact", &id]);
    assert_eq!(unconfirmed.status.code(), Some(3));

    run_cmd(home, &["delete-contact", &id, "--yes"]);
    let again = run_cmd(home, &["delete-contact", &id, "--yes"]);
    assert!(again.contains("nothing changed"));
}

#[test]
fn cli_default_list_id_is_stable_across_runs() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    let first = run_cmd_json(home, &["lists", "ls"]);
    let second = run_cmd_json(home, &["lists", "ls"]);
    let id = first[0]["id"].as_str().expect("id").to_string();
    assert_eq!(second[0]["id"], id.as_str());

    run_cmd(home, &["lists", "rename", &id, "Family"]);
    let after = run_cmd_json(home, &["lists", "ls"]);
    assert_eq!(after[0]["id"], id.as_str());
    assert_eq!(after[0]["name"], "Family");
}

#[test]
fn cli_edit_validates_before_looking_up_contact() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(
        temp.path(),
        &["edit-contact", "contact-missing", "--mobile", "abc"],
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_completions_skip_the_database() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();
    let script = run_cmd(home, &["completions", "bash"]);
    assert!(script.contains("ringbook"));
    assert!(!home.join("ringbook.sqlite3").exists());
}
