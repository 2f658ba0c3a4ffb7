//! Runtime started as a child process.
//!
//! Used where the runtime cannot be hosted in-process. The child inherits
//! stdio and the working directory; its exit code becomes the status.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::args::ArgumentVector;
use crate::runtime::{LaunchStatus, RuntimeLoader};

pub struct ProcessRuntime {
    program: PathBuf,
}

impl ProcessRuntime {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }
}

impl RuntimeLoader for ProcessRuntime {
    fn name(&self) -> &'static str {
        "process"
    }

    fn launch(&mut self, argv: &ArgumentVector) -> LaunchStatus {
        tracing::info!(
            program = %self.program.display(),
            argc = argv.argc(),
            "Launching runtime process"
        );
        match Command::new(&self.program).args(argv.tail()).status() {
            Ok(status) => exit_status(status),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(program = %self.program.display(), "Runtime program not found");
                LaunchStatus::RUNTIME_NOT_FOUND
            }
            Err(e) => {
                tracing::warn!(program = %self.program.display(), "Failed to start runtime: {e}");
                LaunchStatus::PROGRAM_START_FAILED
            }
        }
    }
}

fn exit_status(status: ExitStatus) -> LaunchStatus {
    if let Some(code) = status.code() {
        return LaunchStatus::new(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            tracing::warn!(signal, "Runtime terminated by signal");
            return LaunchStatus::new(128 + signal);
        }
    }
    LaunchStatus::PROGRAM_START_FAILED
}
