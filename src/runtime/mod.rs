//! Runtime loader adapters.
//!
//! The runtime is a black box that takes an argument vector and returns a
//! status code. Launch happens exactly once; adapters never retry.

mod library;
mod process;
mod status;

pub use library::LibraryRuntime;
pub use process::ProcessRuntime;
pub use status::LaunchStatus;

use crate::args::ArgumentVector;
use crate::config::{RuntimeConfig, RuntimeKind};

/// Starts the hosted application.
pub trait RuntimeLoader {
    /// Name of this adapter for logging.
    fn name(&self) -> &'static str;

    /// Launch with `argv` and block until the runtime returns.
    fn launch(&mut self, argv: &ArgumentVector) -> LaunchStatus;
}

/// Build the adapter selected by `config`.
pub fn from_config(config: &RuntimeConfig) -> Box<dyn RuntimeLoader> {
    match config.kind {
        RuntimeKind::Library => Box::new(LibraryRuntime::new(&config.library, &config.entry)),
        RuntimeKind::Process => Box::new(ProcessRuntime::new(&config.program)),
    }
}
