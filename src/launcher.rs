//! One-shot launch sequence: options → arguments → runtime → report.

use std::ffi::OsStr;
use std::path::Path;

use crate::args::{compose, ArgumentVector};
use crate::config::LauncherConfig;
use crate::options::{OptionLimits, OptionsLoader};
use crate::report::{report_failure, Browser, FailureCategory, Messages, Reporter};
use crate::runtime::{LaunchStatus, RuntimeLoader};

/// Result of a launch attempt.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    /// Vector handed to the runtime.
    pub argv: ArgumentVector,
    /// Status reported by the runtime; also the process exit status.
    pub status: LaunchStatus,
    /// Category shown to the user, if any.
    pub reported: Option<FailureCategory>,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    options: OptionsLoader,
    messages: Messages,
}

impl Launcher {
    pub fn new(options: OptionsLoader, messages: Messages) -> Self {
        Self { options, messages }
    }

    /// Launcher reading options from `dir` with limits and texts from `config`.
    pub fn from_config(dir: &Path, config: &LauncherConfig) -> Self {
        let options =
            OptionsLoader::new(dir).with_limits(OptionLimits::from(&config.options));
        Self::new(options, Messages::from_config(&config.report))
    }

    /// Run the launch sequence once.
    ///
    /// `caller_args` is the launcher's own argv, element 0 included. No step
    /// before the runtime call can abort the sequence.
    pub fn launch<A: AsRef<OsStr>>(
        &self,
        caller_args: &[A],
        runtime: &mut dyn RuntimeLoader,
        reporter: &mut dyn Reporter,
        browser: &mut dyn Browser,
    ) -> LaunchOutcome {
        let options = self.options.load();
        tracing::debug!(
            source = ?options.source(),
            count = options.len(),
            "Options ready"
        );

        let argv = compose(caller_args, &options);
        tracing::debug!(argv = ?argv.as_slice(), runtime = runtime.name(), "Composed arguments");

        let status = runtime.launch(&argv);
        tracing::info!(%status, "Runtime returned");

        let reported = report_failure(status, &self.messages, reporter, browser);
        LaunchOutcome {
            argv,
            status,
            reported,
        }
    }
}
