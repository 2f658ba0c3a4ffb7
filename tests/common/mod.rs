//! Shared test utilities: recording runtime, spy reporter, options files.

#![allow(dead_code)]

use std::ffi::OsString;
use std::path::Path;

use hostlaunch::args::ArgumentVector;
use hostlaunch::options::OPTIONS_FILE_NAME;
use hostlaunch::report::{Browser, Dialog, Reporter, UserChoice};
use hostlaunch::runtime::{LaunchStatus, RuntimeLoader};
use tempfile::TempDir;

/// Runtime that records every vector it receives and returns a fixed status.
pub struct RecordingRuntime {
    pub status: LaunchStatus,
    pub calls: Vec<ArgumentVector>,
}

impl RecordingRuntime {
    pub fn returning(status: LaunchStatus) -> Self {
        Self {
            status,
            calls: Vec::new(),
        }
    }
}

impl RuntimeLoader for RecordingRuntime {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn launch(&mut self, argv: &ArgumentVector) -> LaunchStatus {
        self.calls.push(argv.clone());
        self.status
    }
}

/// A dialog as seen by [`SpyReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    RuntimeMissing(Dialog),
    Message(Dialog),
}

/// Reporter that records dialogs and answers prompts with a fixed choice.
pub struct SpyReporter {
    pub answer: UserChoice,
    pub shown: Vec<Shown>,
}

impl SpyReporter {
    pub fn answering(answer: UserChoice) -> Self {
        Self {
            answer,
            shown: Vec::new(),
        }
    }
}

impl Reporter for SpyReporter {
    fn report_runtime_missing(&mut self, dialog: &Dialog) -> UserChoice {
        self.shown.push(Shown::RuntimeMissing(dialog.clone()));
        self.answer
    }

    fn report_message(&mut self, dialog: &Dialog) {
        self.shown.push(Shown::Message(dialog.clone()));
    }
}

/// Browser that records opened URLs.
#[derive(Default)]
pub struct SpyBrowser {
    pub opened: Vec<String>,
}

impl Browser for SpyBrowser {
    fn open_url(&mut self, url: &str) -> std::io::Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// Temp directory holding `launch.properties` with `content`.
pub fn dir_with_options(content: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_options(dir.path(), content);
    dir
}

pub fn write_options(dir: &Path, content: &str) {
    std::fs::write(dir.join(OPTIONS_FILE_NAME), content).expect("Failed to write options");
}

pub fn strings(items: &[&str]) -> Vec<OsString> {
    items.iter().map(OsString::from).collect()
}
