use std::process::Command;

fn quex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quex"));
    // Keep a user config file from leaking into the test run
    cmd.env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out").join("report.txt");

    let status = quex()
        .arg("tests/fixtures/sheets")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let expected = std::fs::read_to_string("tests/fixtures/expected_sheets.txt").unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_cli_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.json");

    let status = quex()
        .args(["--format", "json", "tests/fixtures/sheets"])
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[0]["name"], "Jane Doe");
}

#[test]
fn test_cli_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.txt");

    let status = quex()
        .arg(dir.path().join("nope"))
        .arg(&output)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn test_cli_file_instead_of_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let status = quex()
        .arg("tests/fixtures/expected_sheets.txt")
        .arg(dir.path().join("report.txt"))
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_cli_empty_directory_fails() {
    let input = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("readme.md"), "nothing here").unwrap();
    let output = input.path().join("report.txt");

    let result = quex().arg(input.path()).arg(&output).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("No HTML files found in"));
    assert!(!output.exists());
}

#[test]
fn test_cli_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the output's parent directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let status = quex()
        .arg("tests/fixtures/sheets")
        .arg(blocker.join("report.txt"))
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_cli_custom_extensions_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "extensions = [\"htm\"]\n").unwrap();
    let output = dir.path().join("report.txt");

    let status = quex()
        .arg("--config")
        .arg(&config)
        .arg("tests/fixtures/sheets")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "- Omar Haddad\n    - Question 1: Can machines be creative?\n"
    );
}
