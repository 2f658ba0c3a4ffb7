//! Built-in option table used when no options file exists.

use crate::options::{LaunchOption, OptionSet, OptionSource};

/// Build flavour of the default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    Standard,
    /// Attaches a profiling agent and loads the development payload.
    Profiling,
}

impl BuildVariant {
    /// Variant selected at compile time by the `profiling` feature.
    pub const fn current() -> Self {
        if cfg!(feature = "profiling") {
            Self::Profiling
        } else {
            Self::Standard
        }
    }
}

const COMMON: &[&str] = &[
    "-Xms64m",
    "-Xmx256m",
    "-Dasdf=fdsa",
    "-Dorg.apache.commons.logging.Log=org.apache.commons.logging.impl.NoOpLog",
    "-Djava.net.preferIPv4Stack=true",
    "-ea:com.limegroup...",
    "-ea:org.limewire...",
    "-Djava.library.path=lib",
];

const STANDARD_TAIL: &[&str] = &["-jar", "lib\\MuWire.jar"];

const PROFILING_TAIL: &[&str] = &["-agentlib:yjpagent=port=11111", "-jar", "LimeWire.jar"];

/// The fixed default option set for `variant`.
///
/// The payload flag pair (`-jar <file>`) is always last.
pub fn default_options(variant: BuildVariant) -> OptionSet {
    let tail = match variant {
        BuildVariant::Standard => STANDARD_TAIL,
        BuildVariant::Profiling => PROFILING_TAIL,
    };
    let options = COMMON
        .iter()
        .chain(tail)
        .map(|s| LaunchOption::from(*s))
        .collect();
    OptionSet::new(options, OptionSource::Default)
}
