//! In-process runtime loaded from a shared library.
//!
//! The library exports a C entry point `int entry(int argc, char **argv)`.
//! Failures to reach that entry point are reported as launch statuses so
//! they flow through the same classification as runtime-reported ones.

use std::ffi::{c_char, c_int};
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::args::ArgumentVector;
use crate::runtime::{LaunchStatus, RuntimeLoader};

type EntryFn = unsafe extern "C" fn(c_int, *mut *mut c_char) -> c_int;

pub struct LibraryRuntime {
    path: PathBuf,
    entry: String,
    // Kept loaded until process exit; the runtime may leave threads behind.
    loaded: Option<Library>,
}

impl LibraryRuntime {
    pub fn new(path: impl AsRef<Path>, entry: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entry: entry.into(),
            loaded: None,
        }
    }
}

impl RuntimeLoader for LibraryRuntime {
    fn name(&self) -> &'static str {
        "library"
    }

    fn launch(&mut self, argv: &ArgumentVector) -> LaunchStatus {
        if !self.path.is_file() {
            tracing::warn!(path = %self.path.display(), "Runtime library not found");
            return LaunchStatus::RUNTIME_NOT_FOUND;
        }

        let mut c_argv = match argv.to_c_argv() {
            Ok(c_argv) => c_argv,
            Err(e) => {
                tracing::warn!("Cannot pass arguments to runtime: {e}");
                return LaunchStatus::ARGUMENT_PARSE_FAILED;
            }
        };

        // SAFETY: loading runs the library's initialisers; the library is the
        // runtime this launcher was installed with.
        let lib = match unsafe { Library::new(&self.path) } {
            Ok(lib) => lib,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to load runtime library: {e}");
                return LaunchStatus::RUNTIME_LOAD_FAILED;
            }
        };
        let lib = self.loaded.insert(lib);

        // SAFETY: the entry point is declared with the `EntryFn` signature.
        let entry: Symbol<EntryFn> = match unsafe { lib.get(self.entry.as_bytes()) } {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(entry = %self.entry, "Runtime entry point missing: {e}");
                return LaunchStatus::RUNTIME_INIT_FAILED;
            }
        };

        tracing::info!(
            path = %self.path.display(),
            argc = c_argv.argc(),
            "Launching in-process runtime"
        );
        // SAFETY: `c_argv` owns every string and the NULL-terminated array
        // for the duration of the call.
        let code = unsafe { entry(c_argv.argc(), c_argv.as_mut_ptr()) };
        LaunchStatus::new(code)
    }
}
