use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::options::{OptionLimits, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_OPTIONS};

/// Root launcher settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Limits applied when reading `launch.properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Maximum number of lines read (default: 100).
    #[serde(default = "default_max_options")]
    pub max_options: usize,
    /// Maximum bytes per line, newline included (default: 98).
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

/// How the hosted runtime is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeKind {
    /// Load a bootstrap library exporting `int entry(int, char **)`.
    Library,
    /// Run the bundled runtime executable.
    #[default]
    Process,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub kind: RuntimeKind,
    /// Bootstrap library path, relative to the install directory.
    #[serde(default = "default_library")]
    pub library: PathBuf,
    /// Exported entry point taking `(argc, argv)`.
    #[serde(default = "default_entry")]
    pub entry: String,
    /// Runtime executable, relative to the install directory
    /// (default: the bundled `jre/bin/java`).
    #[serde(default = "default_program")]
    pub program: PathBuf,
}

/// Texts used in failure dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// Opened when the user accepts the runtime download prompt.
    #[serde(default = "default_download_url")]
    pub download_url: String,
}

fn default_max_options() -> usize {
    DEFAULT_MAX_OPTIONS
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_library() -> PathBuf {
    let file = format!(
        "{}launch{}",
        std::env::consts::DLL_PREFIX,
        std::env::consts::DLL_SUFFIX
    );
    ["lib", file.as_str()].iter().collect()
}

fn default_entry() -> String {
    "launch".to_string()
}

fn default_program() -> PathBuf {
    let file = format!("java{}", std::env::consts::EXE_SUFFIX);
    ["jre", "bin", file.as_str()].iter().collect()
}

fn default_product_name() -> String {
    "MuWire".to_string()
}

fn default_download_url() -> String {
    "http://www.java.com/".to_string()
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            max_options: default_max_options(),
            max_line_length: default_max_line_length(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            kind: RuntimeKind::default(),
            library: default_library(),
            entry: default_entry(),
            program: default_program(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            download_url: default_download_url(),
        }
    }
}

impl From<&OptionsConfig> for OptionLimits {
    fn from(config: &OptionsConfig) -> Self {
        Self {
            max_options: config.max_options,
            max_line_length: config.max_line_length,
        }
    }
}
