//! Owned C-style `argc`/`argv` with a trailing NULL.

use std::borrow::Cow;
use std::ffi::{c_char, c_int, CString, OsStr, OsString};
use std::ptr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Argument {index} contains an interior NUL byte")]
    InteriorNul { index: usize },

    #[error("Too many arguments ({count})")]
    TooMany { count: usize },
}

/// Owns the C strings and the pointer array that references them.
///
/// Pointers stay valid for as long as this value lives.
pub struct CArgv {
    _strings: Vec<CString>,
    pointers: Vec<*mut c_char>,
}

impl CArgv {
    pub fn new(args: &[OsString]) -> Result<Self, ArgumentError> {
        if c_int::try_from(args.len()).is_err() {
            return Err(ArgumentError::TooMany { count: args.len() });
        }
        let strings = args
            .iter()
            .enumerate()
            .map(|(index, arg)| {
                CString::new(os_bytes(arg).into_owned())
                    .map_err(|_| ArgumentError::InteriorNul { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pointers = strings
            .iter()
            .map(|s| s.as_ptr().cast_mut())
            .chain(std::iter::once(ptr::null_mut()))
            .collect();

        Ok(Self {
            _strings: strings,
            pointers,
        })
    }

    pub fn argc(&self) -> c_int {
        // Checked against c_int in `new`.
        (self.pointers.len() - 1) as c_int
    }

    /// Pointer array including the trailing NULL.
    pub fn as_ptrs(&self) -> &[*mut c_char] {
        &self.pointers
    }

    pub fn as_mut_ptr(&mut self) -> *mut *mut c_char {
        self.pointers.as_mut_ptr()
    }
}

/// Raw bytes of `arg` as the platform hands them out.
#[cfg(unix)]
fn os_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

/// UTF-8 bytes of `arg`; unpaired surrogates cannot cross a C boundary.
#[cfg(not(unix))]
fn os_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => {
            tracing::warn!(arg = %text, "Argument is not valid Unicode, replaced invalid data");
            Cow::Owned(text.into_bytes())
        }
    }
}
