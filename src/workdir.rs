//! Moves the process into its own install directory.
//!
//! Relative paths (the options file, the settings file, a relative runtime
//! library) then resolve next to the executable no matter where the
//! launcher was started from.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory containing `exe`: everything before the last path separator.
pub fn install_dir(exe: &Path) -> Option<&Path> {
    exe.parent().filter(|dir| !dir.as_os_str().is_empty())
}

/// Change into `dir` and return the working directory as the OS reports it.
pub fn enter(dir: &Path) -> Result<PathBuf> {
    std::env::set_current_dir(dir)
        .with_context(|| format!("failed to change directory to '{}'", dir.display()))?;
    std::env::current_dir().context("failed to read current directory")
}

/// Resolve the executable's directory and make it the working directory.
///
/// Best effort: failures are logged and whatever the working directory is
/// afterwards is returned.
pub fn resolve_working_dir() -> Option<PathBuf> {
    match try_resolve() {
        Ok(dir) => {
            tracing::debug!(dir = %dir.display(), "Working directory set to install directory");
            Some(dir)
        }
        Err(e) => {
            tracing::warn!("Could not enter install directory: {e:#}");
            std::env::current_dir().ok()
        }
    }
}

fn try_resolve() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate executable")?;
    let dir = install_dir(&exe)
        .with_context(|| format!("executable path '{}' has no directory", exe.display()))?;
    enter(dir)
}
