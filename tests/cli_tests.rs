use std::fs;
use std::process::Command;

const LEGACY: &str = include_str!("data/valid_table.h");

#[test]
fn no_args_prints_legacy_fragment() {
    let exe = env!("CARGO_BIN_EXE_validtab");
    let output = Command::new(exe).output().expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), LEGACY);
    assert!(output.stderr.is_empty());
}

#[test]
fn writes_rust_to_file() {
    let exe = env!("CARGO_BIN_EXE_validtab");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("valid.rs");

    let status = Command::new(exe)
        .args(["--format", "rust", "--output", out.to_str().unwrap()])
        .status()
        .expect("run failed");
    assert!(status.success());

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("pub static VALID: [u8; 256] = ["));
}

#[test]
fn bad_format_is_rejected() {
    let exe = env!("CARGO_BIN_EXE_validtab");
    let status = Command::new(exe)
        .args(["--format", "yaml"])
        .status()
        .expect("run failed");
    assert!(!status.success());
}

#[test]
fn unwritable_output_fails() {
    let exe = env!("CARGO_BIN_EXE_validtab");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("valid.h");
    let output = Command::new(exe)
        .args(["--output", out.to_str().unwrap()])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Error writing"), "stderr: {err}");
}

#[test]
fn key_check_accepts_valid_file() {
    let exe = env!("CARGO_BIN_EXE_key_check");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.desktop");
    fs::write(
        &input,
        "# comment\n[Desktop Entry]\nName=App\nName[pt_BR]=Aplicativo\n\nExec=app %U\n",
    )
    .unwrap();

    let output = Command::new(exe)
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3 entries, 0 errors\n");
}

#[test]
fn key_check_reports_bad_lines() {
    let exe = env!("CARGO_BIN_EXE_key_check");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.desktop");
    fs::write(&input, "Bad Key=1\n[Desktop Entry]\nName[]=x\n").unwrap();

    let output = Command::new(exe)
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Error at line 1: Invalid characters in key name"));
    assert!(err.contains("Error in section Desktop Entry at line 3: Empty locale name"));
}

#[test]
fn key_check_missing_file() {
    let exe = env!("CARGO_BIN_EXE_key_check");
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(exe)
        .arg(dir.path().join("nope.desktop").to_str().unwrap())
        .status()
        .expect("run failed");
    assert!(!status.success());
}

#[test]
fn key_check_scans_legacy_encoded_file() {
    let exe = env!("CARGO_BIN_EXE_key_check");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.desktop");
    fs::write(
        &input,
        b"[Desktop Entry]\nName=App\nComment[de]=Gr\xf6\xdfe\nExec=app\n".as_slice(),
    )
    .unwrap();

    let output = Command::new(exe)
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3 entries, 0 errors\n");
}

#[test]
fn key_check_keeps_going_after_high_byte_in_key() {
    let exe = env!("CARGO_BIN_EXE_key_check");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad_key.desktop");
    fs::write(
        &input,
        b"[Desktop Entry]\nNam\xe9=x\r\n\r\nExec=app\n".as_slice(),
    )
    .unwrap();

    let output = Command::new(exe)
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1 entries, 1 errors\n");
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Error in section Desktop Entry at line 2: Invalid characters in key name"));
    assert!(!err.contains("line 3"), "stderr: {err}");
}

#[test]
fn bad_log_level_is_rejected() {
    for exe in [env!("CARGO_BIN_EXE_validtab"), env!("CARGO_BIN_EXE_key_check")] {
        let status = Command::new(exe)
            .args(["--log-level", "loud"])
            .stdin(std::process::Stdio::null())
            .status()
            .expect("run failed");
        assert!(!status.success());
    }
}
