//! Runtime options: the flags placed ahead of caller arguments.
//!
//! Options come from `launch.properties` in the install directory, one flag
//! per line. When that file does not exist the built-in table from
//! [`defaults`] is used instead.

mod defaults;
mod loader;

use std::ffi::{OsStr, OsString};

pub use defaults::{default_options, BuildVariant};
pub use loader::{
    OptionLimits, OptionsError, OptionsLoader, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_OPTIONS,
    OPTIONS_FILE_NAME,
};

/// A single flag handed to the runtime, kept as the platform string the
/// file or table provided.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LaunchOption(OsString);

impl LaunchOption {
    pub fn new(text: impl Into<OsString>) -> Self {
        Self(text.into())
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }
}

impl From<&str> for LaunchOption {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Where an [`OptionSet`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    /// Parsed from the options file, in file order.
    File,
    /// Built-in table; the options file was absent or unreadable.
    Default,
}

/// Ordered options plus their provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<LaunchOption>,
    source: OptionSource,
}

impl OptionSet {
    pub fn new(options: Vec<LaunchOption>, source: OptionSource) -> Self {
        Self { options, source }
    }

    /// An empty file-sourced set.
    pub fn empty() -> Self {
        Self::new(Vec::new(), OptionSource::File)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn source(&self) -> OptionSource {
        self.source
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchOption> {
        self.options.iter()
    }

    /// Option texts in order.
    pub fn to_os_strings(&self) -> Vec<OsString> {
        self.options.iter().map(|o| o.0.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a LaunchOption;
    type IntoIter = std::slice::Iter<'a, LaunchOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
