//! Runs the built launcher binary without a runtime next to it.

use std::process::{Command, Stdio};

#[test]
fn missing_runtime_exits_with_runtime_not_found_status() {
    let output = Command::new(env!("CARGO_BIN_EXE_hostlaunch"))
        .arg("--verbose")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(201));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Launcher Error"));
    assert!(stderr.contains("Java Runtime Environment"));
}
