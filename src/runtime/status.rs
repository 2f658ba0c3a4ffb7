//! Launch status codes reported by runtime adapters.

use std::fmt;

/// Opaque outcome code of a launch attempt.
///
/// Becomes the process exit status unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaunchStatus(i32);

impl LaunchStatus {
    pub const SUCCESS: Self = Self(0);
    /// No runtime could be located.
    pub const RUNTIME_NOT_FOUND: Self = Self(201);
    /// The runtime was located but refused to initialize.
    pub const RUNTIME_INIT_FAILED: Self = Self(202);
    /// The runtime was located but could not be loaded.
    pub const RUNTIME_LOAD_FAILED: Self = Self(203);
    /// The runtime rejected the argument vector.
    pub const ARGUMENT_PARSE_FAILED: Self = Self(204);
    /// The runtime came up but the application payload did not start.
    pub const PROGRAM_START_FAILED: Self = Self(205);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
