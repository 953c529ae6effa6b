use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(bin: &str, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    // The binary may exit (e.g. on a usage error) before reading stdin.
    if let Err(e) = child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin.as_bytes())
    {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "write stdin: {e}");
    }
    child.wait_with_output().expect("wait for binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn json_equal_reads_second_document_from_stdin() {
    let bin = env!("CARGO_BIN_EXE_json-equal");
    let out = run(bin, &[r#"{"a":[1,2]}"#], r#"{"a":[1,2]}"#);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "true");

    let out = run(bin, &["[1]", "[2]"], "");
    assert_eq!(stdout(&out), "false");
}

#[test]
fn json_diff_prints_additions_and_changes() {
    let bin = env!("CARGO_BIN_EXE_json-diff");
    let out = run(bin, &[r#"{"a":1,"b":{"c":[1]}}"#], r#"{"a":1,"b":{"c":[1,2]},"d":true}"#);
    assert!(out.status.success());
    assert_eq!(stdout(&out), r#"{"b":{"c":{"1":2}},"d":true}"#);
}

#[test]
fn json_diff_reports_missing_indices_but_not_removed_keys() {
    let bin = env!("CARGO_BIN_EXE_json-diff");
    let out = run(bin, &["[1,2,3]"], "[1]");
    assert_eq!(stdout(&out), r#"{"1":null,"2":null}"#);

    let out = run(bin, &[r#"{"a":1,"b":2}"#], r#"{"a":1}"#);
    assert_eq!(stdout(&out), "{}");
}

#[test]
fn json_flatten_with_prefix() {
    let bin = env!("CARGO_BIN_EXE_json-flatten");
    let out = run(bin, &["root."], r#"{"a":{"b":1},"c":[]}"#);
    assert!(out.status.success());
    assert_eq!(stdout(&out), r#"{"root.a.b":1,"root.c":[]}"#);
}

#[test]
fn json_list_operations() {
    let bin = env!("CARGO_BIN_EXE_json-list");
    assert_eq!(stdout(&run(bin, &["swap", "0", "1"], "[1,2]")), "[2,1]");
    assert_eq!(stdout(&run(bin, &["sort-desc"], "[2,9,4]")), "[9,4,2]");
    assert_eq!(stdout(&run(bin, &["unique"], "[1,{\"a\":1},{\"a\":1}]")), "false");
}

#[test]
fn errors_exit_with_status_one() {
    let out = run(env!("CARGO_BIN_EXE_json-list"), &["remove", "7"], "[1,2]");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of bounds"));

    let out = run(env!("CARGO_BIN_EXE_json-diff"), &[], "{}");
    assert_eq!(out.status.code(), Some(1));

    let out = run(env!("CARGO_BIN_EXE_json-flatten"), &[], "{not json");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid JSON"));
}
