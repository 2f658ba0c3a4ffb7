//! Launcher settings (`launcher.toml`).
//!
//! Separate from `launch.properties`: these settings describe how the
//! launcher itself behaves, not what is passed to the runtime.

mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_FILE_NAME};
pub use types::{LauncherConfig, OptionsConfig, ReportConfig, RuntimeConfig, RuntimeKind};
