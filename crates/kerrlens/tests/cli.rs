use std::process::Command;

#[test]
fn help_lists_options_and_controls() {
    let output = Command::new(env!("CARGO_BIN_EXE_kerrlens"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["--size", "--shader-dir", "--gpu-power", "Controls:"] {
        assert!(stdout.contains(needle), "missing {needle} in:\n{stdout}");
    }
}

#[test]
fn malformed_size_fails_before_opening_a_window() {
    let output = Command::new(env!("CARGO_BIN_EXE_kerrlens"))
        .args(["--size", "huge"])
        .env("RUST_LOG", "error")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stderr.contains("--size") || stdout.contains("--size"),
        "error should name the flag:\nstdout: {stdout}\nstderr: {stderr}"
    );
}

#[test]
fn unknown_gpu_power_is_a_usage_error() {
    let status = Command::new(env!("CARGO_BIN_EXE_kerrlens"))
        .args(["--gpu-power", "turbo"])
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(2));
}
