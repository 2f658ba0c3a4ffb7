//! Native bootstrapper for a hosted runtime.
//!
//! The launcher owns the visible process identity while the application runs
//! inside a runtime started from here. A launch is a single pass:
//!
//! ```text
//! install dir → launch.properties / defaults → argv → runtime → report
//! ```

pub mod args;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod options;
pub mod report;
pub mod runtime;
pub mod workdir;

pub use launcher::{LaunchOutcome, Launcher};
