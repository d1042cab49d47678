// crates/stfeat-cli/tests/decode_cli.rs

use std::io::Write;
use std::process::{Command, Output};

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stfeat-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout).lines().map(str::to_owned).collect()
}

#[test]
fn decodes_compass_hex_stream_as_text() {
    let out = run_ok(cli().args([
        "decode", "--feature", "compass", "--hex", "50 46 28 23 01", "--start-ts", "10",
    ]));
    assert_eq!(stdout_lines(&out), ["ts=10 Angle=180°", "ts=11 Angle=90°"]);

    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("trailing_bytes = 1"), "stderr: {err}");
    assert!(err.contains("records=2"), "stderr: {err}");
}

#[test]
fn decodes_compact_fusion_file_as_jsonl() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    let mut bytes = vec![0xAA, 0xBB];
    for v in [10000i16, 0, 0] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    f.write_all(&bytes).expect("write input");

    let out = run_ok(cli().args([
        "decode",
        "--feature",
        "fusion-compact",
        "--offset",
        "2",
        "--format",
        "jsonl",
        "--in",
        f.path().to_str().expect("utf8 path"),
    ]));
    assert_eq!(
        stdout_lines(&out),
        [r#"{"timestamp":0,"values":{"qi":1.0,"qj":0.0,"qk":0.0,"qs":0.0}}"#]
    );
}

#[test]
fn reject_policy_fails_on_over_unit_vector() {
    // qi = qj = 1.0
    let out = cli()
        .args(["decode", "--feature", "fusion-compact", "--hex", "1027 1027 0000"])
        .args(["--scalar-policy", "reject"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("scalar reconstruction failed"));
}

#[test]
fn lists_fusion_fields() {
    let out = run_ok(cli().args(["fields", "--feature", "fusion"]));
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], "MEMS Sensor Fusion (min 12 bytes)");
    assert_eq!(lines.len(), 5);
    assert!(lines[4].trim_start().starts_with("qs"));
}

#[test]
fn propagated_nan_scalar_is_null_in_jsonl() {
    // qi = qj = 1.0 leaves no room for the scalar
    let out = run_ok(cli().args([
        "decode", "--feature", "fusion-compact", "--hex", "1027 1027 0000", "--format", "jsonl",
    ]));
    assert_eq!(
        stdout_lines(&out),
        [r#"{"timestamp":0,"values":{"qi":1.0,"qj":1.0,"qk":0.0,"qs":null}}"#]
    );
}
