//! Options file reader.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::options::defaults::{default_options, BuildVariant};
use crate::options::{LaunchOption, OptionSet, OptionSource};

/// Fixed name of the options file, relative to the install directory.
pub const OPTIONS_FILE_NAME: &str = "launch.properties";

pub const DEFAULT_MAX_OPTIONS: usize = 100;

/// Bytes per read, newline included.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 98;

/// Errors that can occur when reading the options file.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Options file '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("Failed to read options file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Upper bounds applied while reading the options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionLimits {
    /// Maximum number of reads (lines or line fragments).
    pub max_options: usize,
    /// Maximum bytes consumed by a single read.
    pub max_line_length: usize,
}

impl Default for OptionLimits {
    fn default() -> Self {
        Self {
            max_options: DEFAULT_MAX_OPTIONS,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Reads `launch.properties` from a directory, or supplies the defaults.
#[derive(Debug, Clone)]
pub struct OptionsLoader {
    dir: PathBuf,
    limits: OptionLimits,
    variant: BuildVariant,
}

impl OptionsLoader {
    /// Loader for the options file in `dir`, using default limits and the
    /// compile-time build variant.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            limits: OptionLimits::default(),
            variant: BuildVariant::current(),
        }
    }

    pub fn with_limits(mut self, limits: OptionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_variant(mut self, variant: BuildVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(OPTIONS_FILE_NAME)
    }

    /// Load options, never failing.
    ///
    /// A missing file selects the default table. An unreadable file does too,
    /// but is logged as a warning.
    pub fn load(&self) -> OptionSet {
        match self.try_load() {
            Ok(set) => {
                tracing::debug!(count = set.len(), "Loaded options from file");
                set
            }
            Err(OptionsError::NotFound { path }) => {
                tracing::debug!(path = %path.display(), "No options file, using defaults");
                default_options(self.variant)
            }
            Err(err) => {
                tracing::warn!("{err}; using default options");
                default_options(self.variant)
            }
        }
    }

    /// Load options from the file only.
    pub fn try_load(&self) -> Result<OptionSet, OptionsError> {
        let path = self.path();
        let file = File::open(&path).map_err(|e| classify_io(&path, e))?;

        // Never consume more than the limits could turn into options.
        let budget = self
            .limits
            .max_options
            .saturating_mul(self.limits.max_line_length) as u64;
        let mut content = Vec::new();
        file.take(budget)
            .read_to_end(&mut content)
            .map_err(|e| classify_io(&path, e))?;

        Ok(parse_options(&content, self.limits))
    }
}

fn classify_io(path: &Path, source: io::Error) -> OptionsError {
    if source.kind() == io::ErrorKind::NotFound {
        OptionsError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        OptionsError::ReadError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Split raw file content into options.
///
/// Each read takes at most `max_line_length` bytes and stops after a newline,
/// so an overlong line turns into several options. Every read counts toward
/// `max_options`, including empty lines that are then skipped. Bytes are
/// kept as read.
pub(crate) fn parse_options(content: &[u8], limits: OptionLimits) -> OptionSet {
    let chunk_len = limits.max_line_length.max(1);
    let mut options = Vec::new();
    let mut rest = content;

    for _ in 0..limits.max_options {
        if rest.is_empty() {
            break;
        }
        let take = read_len(rest, chunk_len);
        let (chunk, tail) = rest.split_at(take);
        rest = tail;

        let line = strip_newline(chunk);
        if line.is_empty() {
            continue;
        }
        options.push(LaunchOption::new(os_string_from_bytes(line)));
    }

    if !rest.is_empty() {
        tracing::warn!(
            max_options = limits.max_options,
            "Options file exceeds the option limit, ignoring the remainder"
        );
    }

    OptionSet::new(options, OptionSource::File)
}

/// Length of the next read from `rest`.
///
/// A read ending on the `\r` of a `\r\n` pair also takes the `\n`. A read
/// that would end inside a UTF-8 sequence stops before that sequence instead.
fn read_len(rest: &[u8], chunk_len: usize) -> usize {
    let window = &rest[..rest.len().min(chunk_len)];
    if let Some(i) = window.iter().position(|&b| b == b'\n') {
        return i + 1;
    }
    let take = window.len();
    match rest.get(take) {
        Some(b'\n') if window.last() == Some(&b'\r') => take + 1,
        Some(&next) if is_continuation(next) => {
            let lead = window
                .iter()
                .rposition(|&b| !is_continuation(b))
                .filter(|&i| take - i < 4);
            match lead {
                Some(i) if i > 0 => i,
                _ => take,
            }
        }
        _ => take,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes.to_vec())
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    match std::str::from_utf8(bytes) {
        Ok(text) => OsString::from(text),
        Err(_) => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            tracing::warn!(option = %text, "Option is not valid UTF-8, replaced invalid bytes");
            OsString::from(text)
        }
    }
}

fn strip_newline(chunk: &[u8]) -> &[u8] {
    match chunk {
        [head @ .., b'\r', b'\n'] => head,
        [head @ .., b'\n'] => head,
        _ => chunk,
    }
}
