//! Tests for `launcher.toml` loading and validation.

use hostlaunch::config::{ConfigError, LauncherConfig, RuntimeKind, CONFIG_FILE_NAME};
use tempfile::TempDir;

fn dir_with_config(content: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), content).expect("Failed to write config");
    dir
}

/// Test that LauncherConfig::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = LauncherConfig::default();

    assert_eq!(config.options.max_options, 100);
    assert_eq!(config.options.max_line_length, 98);
    assert_eq!(config.runtime.kind, RuntimeKind::Process);
    assert_eq!(config.runtime.entry, "launch");
    assert!(config.runtime.library.starts_with("lib"));
    assert_eq!(config.report.product_name, "MuWire");
    assert_eq!(config.report.download_url, "http://www.java.com/");
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = LauncherConfig::load(dir.path()).expect("missing file is not an error");
    assert_eq!(config, LauncherConfig::default());
}

#[test]
fn test_config_path_ends_with_expected() {
    let dir = TempDir::new().unwrap();
    assert!(LauncherConfig::config_path(dir.path()).ends_with("launcher.toml"));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = dir_with_config(
        r#"
[report]
product_name = "Acme"
"#,
    );

    let config = LauncherConfig::load(dir.path()).unwrap();

    assert_eq!(config.report.product_name, "Acme");
    assert_eq!(config.report.download_url, "http://www.java.com/");
    assert_eq!(config.options.max_options, 100);
    assert_eq!(config.runtime.kind, RuntimeKind::Process);
}

#[test]
fn test_process_runtime_parses() {
    let dir = dir_with_config(
        r#"
[runtime]
kind = "process"
program = "/usr/bin/java"

[options]
max_options = 10
max_line_length = 200
"#,
    );

    let config = LauncherConfig::load(dir.path()).unwrap();

    assert_eq!(config.runtime.kind, RuntimeKind::Process);
    assert_eq!(config.runtime.program.to_str(), Some("/usr/bin/java"));
    assert_eq!(config.options.max_options, 10);
    assert_eq!(config.options.max_line_length, 200);
}

#[test]
fn test_parse_invalid_toml() {
    let dir = dir_with_config("this is not valid toml [[[");
    let result = LauncherConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_unknown_runtime_kind_is_a_parse_error() {
    let dir = dir_with_config("[runtime]\nkind = \"thread\"\n");
    let result = LauncherConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_zero_limits() {
    let dir = dir_with_config("[options]\nmax_options = 0\n");

    match LauncherConfig::load(dir.path()).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("max_options"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_empty_entry_for_library() {
    let mut config = LauncherConfig::default();
    config.runtime.kind = RuntimeKind::Library;
    config.runtime.entry.clear();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    config.runtime.kind = RuntimeKind::Process;
    assert!(config.validate().is_ok());
}

/// The default runtime is the bundled executable, not a bare `java` from PATH.
#[test]
fn test_default_runtime_is_bundled_executable() {
    let program = LauncherConfig::default().runtime.program;

    assert!(program.is_relative());
    assert!(program.starts_with("jre"));
    let file = program.file_name().and_then(|f| f.to_str()).unwrap();
    assert_eq!(file, format!("java{}", std::env::consts::EXE_SUFFIX));
    assert_eq!(program.parent().and_then(|p| p.file_name()).unwrap(), "bin");
}

#[test]
fn test_library_runtime_still_selectable() {
    let dir = dir_with_config("[runtime]\nkind = \"library\"\nlibrary = \"lib/boot.so\"\n");

    let config = LauncherConfig::load(dir.path()).unwrap();

    assert_eq!(config.runtime.kind, RuntimeKind::Library);
    assert_eq!(config.runtime.entry, "launch");
    assert_eq!(config.runtime.library.to_str(), Some("lib/boot.so"));
}

/// Test round-trip serialization/deserialization.
#[test]
fn test_config_roundtrip() {
    let original = LauncherConfig::default();
    let serialized = toml::to_string(&original).expect("Should serialize");
    let deserialized: LauncherConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(original, deserialized);
}
