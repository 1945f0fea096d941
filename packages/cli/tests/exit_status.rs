//! Exit status of the built binary

use std::process::{Command, Output};

fn webbuilder(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_webbuilder"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .unwrap()
}

#[test]
fn test_import_without_html_exits_with_one() {
    let output = webbuilder(&["import"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("<HTML>"));
}

#[test]
fn test_unknown_flag_exits_with_one() {
    assert_eq!(webbuilder(&["export", "--bogus"]).status.code(), Some(1));
}

#[test]
fn test_missing_schema_exits_with_one() {
    let output = webbuilder(&["export"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_help_exits_with_zero() {
    let output = webbuilder(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("import"));
}

#[test]
fn test_init_then_export_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let run = |args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_webbuilder"))
            .args(args)
            .current_dir(dir.path())
            .status()
            .unwrap()
    };

    assert!(run(&["init"]).success());
    assert!(run(&["export"]).success());
    assert!(dir.path().join("export/dist/index.html").is_file());
}
