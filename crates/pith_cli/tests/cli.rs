use std::io::Write;
use std::process::{Command, Stdio};

fn run_pith(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pith"))
        .args(args)
        .env_remove("PITH_LOG")
        .output()
        .unwrap()
}

fn run_pith_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pith"))
        .args(args)
        .env_remove("PITH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(out: &std::process::Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn usage_without_args() {
    let out = run_pith(&[]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: pith"));
}

#[test]
fn dashed_options_are_rejected() {
    let out = run_pith(&["count", "--json", "abc"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown option: --json"));
}

#[test]
fn unknown_command_prints_usage() {
    let out = run_pith(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown command: frobnicate"));
    assert!(stderr.contains("Usage: pith"));
}

#[test]
fn count_requires_text() {
    let out = run_pith(&["count"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Missing <text>"));
}

#[test]
fn count_counts_codepoints_not_units() {
    let out = run_pith(&["count", "a😀b"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "3\n");
}

#[test]
fn count_json_reports_units_too() {
    let out = run_pith(&["count", "json", "a😀b"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(v["codepoints"], "3");
    assert_eq!(v["units"], 4);
}

#[test]
fn double_dash_lets_flag_words_be_text() {
    let out = run_pith(&["count", "hex"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Missing <text>"));

    let out = run_pith(&["count", "--", "hex"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "3\n");

    let out = run_pith(&["prefix", "json", "--", "upper", "upset"]);
    let v: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(v["text"], "up");
}

#[test]
fn codepoints_lists_scalar_values() {
    let out = run_pith(&["codepoints", "A😀"]);
    assert_eq!(stdout(&out), "U+0041 U+1F600\n");

    let out = run_pith(&["codepoints", "json", "A😀"]);
    let v: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(v, serde_json::json!([0x41, 0x1F600]));
}

#[test]
fn first_and_last_take_whole_pairs() {
    assert_eq!(stdout(&run_pith(&["first", "😀x"])), "😀\n");
    assert_eq!(stdout(&run_pith(&["last", "x😀"])), "😀\n");
    assert_eq!(stdout(&run_pith(&["first", ""])), "\n");
}

#[test]
fn first_json_reports_unit_offsets() {
    let out = run_pith(&["last", "json", "ab😀"]);
    let v: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(v["start"], 2);
    assert_eq!(v["len"], 2);
    assert_eq!(v["count"], "1");
    assert_eq!(v["text"], "😀");
}

#[test]
fn prefix_with_and_without_cap() {
    assert_eq!(stdout(&run_pith(&["prefix", "abcd", "abce"])), "abc\n");
    assert_eq!(stdout(&run_pith(&["prefix", "abcd", "abce", "2"])), "ab\n");
    assert_eq!(stdout(&run_pith(&["prefix", "abcd", "abce", "-1"])), "abc\n");
    assert_eq!(stdout(&run_pith(&["prefix", "abcd", "xyz"])), "\n");
}

#[test]
fn prefix_rejects_non_integer_cap() {
    let out = run_pith(&["prefix", "a", "a", "two"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("<n> is not an integer"));
}

#[test]
fn window_slides_over_text() {
    assert_eq!(stdout(&run_pith(&["window", "hello", "2", "1"])), "el\n");
    assert_eq!(stdout(&run_pith(&["window", "hello", "2", "4"])), "o\n");
    assert_eq!(stdout(&run_pith(&["window", "a😀b", "1", "1"])), "😀\n");
    assert_eq!(stdout(&run_pith(&["window", "hello", "3", "-5"])), "hel\n");
}

#[test]
fn int_parse_decimal_and_hex() {
    assert_eq!(
        stdout(&run_pith(&["int", "parse", "123456789012345678901234567890"])),
        "123456789012345678901234567890\n"
    );
    assert_eq!(stdout(&run_pith(&["int", "parse", "0x1F"])), "31\n");
    assert_eq!(stdout(&run_pith(&["int", "parse", "ff", "hex"])), "255\n");
    assert_eq!(stdout(&run_pith(&["int", "parse", "-42"])), "-42\n");
}

#[test]
fn int_parse_invalid_fails() {
    let out = run_pith(&["int", "parse", "12x"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid integer literal"));
    assert!(out.stdout.is_empty());
}

#[test]
fn int_divmod_floors() {
    assert_eq!(stdout(&run_pith(&["int", "divmod", "7", "2"])), "3 1\n");
    assert_eq!(stdout(&run_pith(&["int", "divmod", "-7", "2"])), "-4 1\n");
    assert_eq!(stdout(&run_pith(&["int", "divmod", "7", "0"])), "0 0\n");
}

#[test]
fn int_format_hex() {
    assert_eq!(stdout(&run_pith(&["int", "format", "255"])), "255\n");
    assert_eq!(stdout(&run_pith(&["int", "format", "255", "hex"])), "ff\n");
    assert_eq!(
        stdout(&run_pith(&["int", "format", "-255", "hex", "upper"])),
        "-FF\n"
    );
}

#[test]
fn int_fixed32_saturates() {
    assert_eq!(
        stdout(&run_pith(&["int", "fixed32", "99999999999999999999"])),
        "2147483647\n"
    );
    assert_eq!(
        stdout(&run_pith(&["int", "fixed32", "-99999999999999999999"])),
        "-2147483648\n"
    );
    assert_eq!(stdout(&run_pith(&["int", "fixed32", "1e20"])), "2147483647\n");
    assert_eq!(stdout(&run_pith(&["int", "fixed32", "-3.9"])), "-3\n");
}

#[test]
fn int_unknown_subcommand() {
    let out = run_pith(&["int", "sqrt", "4"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown int command: sqrt"));
}

#[test]
fn echo_counts_each_line() {
    let out = run_pith_with_stdin(&["echo"], "héllo\r\n😀😀\n\nlast");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "5\théllo\n2\t😀😀\n0\t\n4\tlast\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("echo: 4 line(s)"));
}

#[test]
fn echo_quiet_suppresses_trace() {
    let out = run_pith_with_stdin(&["echo", "quiet"], "x\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1\tx\n");
    assert!(!String::from_utf8_lossy(&out.stderr).contains("echo:"));
}

#[test]
fn echo_with_empty_input() {
    let out = run_pith_with_stdin(&["echo"], "");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}
