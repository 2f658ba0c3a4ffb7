//! Argument composition for the runtime loader.
//!
//! ```text
//! process path → options (file or defaults) → caller args[1..] → NULL
//! ```
//!
//! Options always precede caller arguments, so for flags where the
//! right-most occurrence wins a caller can override a configured value.

mod assembler;
mod cargv;

pub use assembler::{compose, ArgAssembler, ArgumentVector};
pub use cargv::{ArgumentError, CArgv};
