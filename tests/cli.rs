//! Exit statuses and messages of the `xmlparse` binary.

use std::process::{Command, Output, Stdio};

const XMLPARSE: &str = env!("CARGO_BIN_EXE_xmlparse");

fn xmlparse(args: &[&str]) -> Output {
    Command::new(XMLPARSE)
        .args(args)
        .output()
        .expect("failed to run xmlparse")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn well_formed_file_test() {
    let output = xmlparse(&["tests/files/catalog.xml"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        output.stdout,
        std::fs::read("tests/result/catalog.xml.out").unwrap()
    );
    assert!(output.stderr.is_empty(), "{}", stderr_of(&output));
}

#[test]
fn unreadable_file_test() {
    let output = xmlparse(&["tests/files/nope.xml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("failed to load \"tests/files/nope.xml\""));
}

#[test]
fn fatal_error_wins_over_io_error_test() {
    let output = xmlparse(&["tests/files/mismatch.xml", "tests/files/nope.xml"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("Fatal Error!: line 3: Opening and ending tag mismatch"));
    assert!(stderr.contains("failed to load \"tests/files/nope.xml\""));
}

#[test]
fn max_errors_test() {
    let output = xmlparse(&["--max-errors", "0", "tests/files/entities.xml"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        stderr_of(&output),
        "Error!: line 2: Entity 'copy' not defined\n\
         tests/files/entities.xml: 1 errors reported, the limit is 0\n"
    );

    let output = xmlparse(&["--max-errors", "1", "tests/files/entities.xml"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn nowarning_test() {
    let output = xmlparse(&["--nowarning", "tests/files/version.xml"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "{}", stderr_of(&output));
}

#[test]
fn print_mappings_test() {
    let output = xmlparse(&["-p"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, "·»↵\n".as_bytes());
}

#[test]
fn usage_error_test() {
    assert_eq!(xmlparse(&[]).status.code(), Some(2));
    let output = xmlparse(&["-l", "0", "tests/files/catalog.xml"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn completions_test() {
    let output = xmlparse(&["--completions", "bash"]);
    assert_eq!(output.status.code(), Some(0));
    let script = String::from_utf8(output.stdout).unwrap();
    assert!(script.contains("_xmlparse()"), "{script}");
    assert!(script.contains("--map-whitespace"));
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_is_reported_once_test() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();
    let output = Command::new(XMLPARSE)
        .args(["tests/files/catalog.xml", "tests/files/entities.xml"])
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert_eq!(stderr.matches("failed to write output").count(), 1, "{stderr}");
}
