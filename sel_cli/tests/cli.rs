use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn sel() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sel"));
    command
        .env_remove("RUST_LOG")
        .env("SEL_LOGGING_MIN_LEVEL", "error")
        .stdin(Stdio::null());
    command
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn accepted_expression_exits_zero() {
    let output = sel().arg("(1+2)*3").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Syntax OK!");
}

#[test]
fn rejected_expression_exits_one() {
    let output = sel().arg("1+2 3").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "Bad syntax!");
}

#[test]
fn reads_prompted_line_from_stdin() {
    let mut child = sel()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"2 * (3 + 4)\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "> Syntax OK!\n");
}

#[test]
fn json_report_contains_verdict() {
    let output = sel().args(["--json", "1 + #"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["verdict"], "rejected");
    assert_eq!(report["error"]["code"], "E044");
    assert_eq!(report["error"]["found"], "Invalid");
}

#[test]
fn file_mode_checks_each_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1+2*3\n\n(1+2)*3\n(4").unwrap();

    let output = sel().arg("--file").arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let text = stdout(&output);
    assert!(text.contains("1: Syntax OK!"));
    assert!(text.contains("3: Syntax OK!"));
    assert!(text.contains("4: Bad syntax!"));
    assert!(text.contains("3 checked, 2 accepted, 1 rejected"));
}

#[test]
fn missing_file_exits_two() {
    let output = sel()
        .args(["--file", "/nonexistent/sel/exprs.txt"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn empty_file_exits_two() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "\n   \n").unwrap();

    let output = sel().arg("--file").arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no expressions found"));
}

#[test]
fn invalid_config_exits_two() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[syntax]\nmax_parse_depth = 0").unwrap();

    let output = sel()
        .arg("--config")
        .arg(config.path())
        .arg("1")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn config_file_limits_nesting() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[syntax]\nmax_parse_depth = 2").unwrap();

    let within = sel().arg("--config").arg(config.path()).arg("((1))").output().unwrap();
    assert_eq!(within.status.code(), Some(0));

    let beyond = sel().arg("--config").arg(config.path()).arg("(((1)))").output().unwrap();
    assert_eq!(beyond.status.code(), Some(1));
}
