use std::ffi::OsString;
use std::process;

use hostlaunch::config::LauncherConfig;
use hostlaunch::logging;
use hostlaunch::report::{ConsoleReporter, SystemBrowser};
use hostlaunch::runtime;
use hostlaunch::workdir;
use hostlaunch::Launcher;

fn main() {
    logging::init_tracing();

    let dir = workdir::resolve_working_dir().unwrap_or_else(|| ".".into());

    let config = LauncherConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!("{e}; using default launcher settings");
        LauncherConfig::default()
    });

    let caller_args: Vec<OsString> = std::env::args_os().collect();
    let mut runtime = runtime::from_config(&config.runtime);
    let mut reporter = ConsoleReporter::stdio();
    let mut browser = SystemBrowser;

    let outcome = Launcher::from_config(&dir, &config).launch(
        &caller_args,
        runtime.as_mut(),
        &mut reporter,
        &mut browser,
    );

    process::exit(outcome.status.code());
}
