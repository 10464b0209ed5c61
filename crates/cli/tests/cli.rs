use assert_cmd::Command;

fn libris() -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.env_remove("LIBRIS_ENV")
        .env_remove("LIBRIS_CATALOG__POLICY")
        .env_remove("LIBRIS_CONFIG_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn demo_passes_every_check() {
    let output = libris().arg("demo").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in [
        "addBook",
        "removeBook",
        "searchBookByTitle",
        "searchBookByAuthor",
        "searchBookByISBN",
        "addUser",
        "removeUser",
        "borrowBook",
        "returnBook",
    ] {
        assert!(stdout.contains(&format!("Test {name}: Passed")), "{stdout}");
    }
    assert!(!stdout.contains("Failed"));
}

#[test]
fn policy_flag_overrides_settings() {
    let output = libris()
        .args(["--policy", "permissive", "settings"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["catalog"]["policy"], "permissive");
    assert_eq!(settings["environment"], "local");
}

#[test]
fn policy_env_var_is_honoured() {
    let output = libris()
        .env("LIBRIS_CATALOG__POLICY", "permissive")
        .arg("settings")
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["catalog"]["policy"], "permissive");
}

#[test]
fn unknown_environment_fails() {
    libris().env("LIBRIS_ENV", "qa").arg("settings").assert().failure();
}

#[test]
fn catalog_prints_json_with_one_loan() {
    let output = libris().arg("catalog").output().unwrap();
    assert!(output.status.success());

    let catalog: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(catalog["policy"], "strict");
    assert_eq!(catalog["books"].as_array().unwrap().len(), 3);
    let borrowed: Vec<_> = catalog["books"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|book| book["is_borrowed"] == true)
        .collect();
    assert_eq!(borrowed.len(), 1);
    assert_eq!(catalog["users"][0]["borrowed_books"][0], "978-1492052593");
}
