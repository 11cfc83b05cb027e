use std::path::Path;
use std::process::{Command, Output};

fn aim(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aim"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run aim")
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

const LOGIN: [&str; 11] = [
    "login",
    "--id",
    "user0001",
    "--password",
    "Abcdefg12!",
    "--password-confirm",
    "Abcdefg12!",
    "--email",
    "user@example.com",
    "--phone",
    "01012345678",
];

#[test]
fn validate_reports_field_error_with_exit_code_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = aim(dir.path(), &["--json", "validate", "--field", "id", "--value", "short"]);

    assert_eq!(output.status.code(), Some(2));
    let field = json(&output);
    assert_eq!(field["status"], "invalid");
    assert_eq!(field["errorCode"], "id_too_short");
}

#[test]
fn validate_accepts_good_value() {
    let dir = tempfile::tempdir().unwrap();
    let output = aim(dir.path(), &["validate", "--field", "email", "--value", "a@b.co"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "email: ok");
}

#[test]
fn unknown_field_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = aim(dir.path(), &["--json", "validate", "--field", "nickname", "--value", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json(&output)["code"], "unknown_field");
}

#[test]
fn invalid_login_does_not_save_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = LOGIN.to_vec();
    args[6] = "Different1!";
    let mut with_json = vec!["--json"];
    with_json.extend(args);

    let output = aim(dir.path(), &with_json);
    assert_eq!(output.status.code(), Some(2));
    let form = json(&output);
    assert_eq!(form["isValid"], false);
    assert_eq!(form["fields"][2]["errorCode"], "password_mismatch");

    let status = json(&aim(dir.path(), &["--json", "status"]));
    assert_eq!(status["loggedIn"], false);
    assert_eq!(status["route"]["route"], "login");
}

#[test]
fn session_survives_between_invocations_until_logout() {
    let dir = tempfile::tempdir().unwrap();

    let login = aim(dir.path(), &LOGIN);
    assert!(login.status.success(), "{}", String::from_utf8_lossy(&login.stderr));

    let stored = std::fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    assert!(stored.contains("user0001"));
    assert!(!stored.contains("Abcdefg12!"));

    let status = json(&aim(dir.path(), &["--json", "status"]));
    assert_eq!(status["loggedIn"], true);
    assert_eq!(status["route"]["route"], "dashboard");
    assert_eq!(status["route"]["tab"], "allocation");

    assert!(aim(dir.path(), &["logout"]).status.success());

    let status = json(&aim(dir.path(), &["--json", "status"]));
    assert_eq!(status["loggedIn"], false);
}

#[test]
fn dashboard_and_etfs_print_catalog() {
    let dir = tempfile::tempdir().unwrap();

    let dashboard = json(&aim(dir.path(), &["--json", "dashboard"]));
    assert_eq!(dashboard["groups"].as_array().unwrap().len(), 3);
    assert_eq!(dashboard["tabs"].as_array().unwrap().len(), 3);

    let etfs = json(&aim(dir.path(), &["--json", "etfs"]));
    assert_eq!(etfs.as_array().unwrap().len(), 4);
}
