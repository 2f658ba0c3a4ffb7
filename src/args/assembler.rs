//! Argument assembler — process name, options, caller args, in that order.

use std::ffi::{OsStr, OsString};

use crate::args::cargv::{ArgumentError, CArgv};
use crate::options::OptionSet;

/// Final argument list handed to the runtime loader.
///
/// Element 0 is the invoking process path. Arguments are platform strings
/// and are never re-encoded. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentVector {
    args: Vec<OsString>,
}

impl ArgumentVector {
    /// Number of arguments, not counting the terminator.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.args
    }

    /// Invoking process path (element 0).
    pub fn process_path(&self) -> &OsStr {
        &self.args[0]
    }

    /// Everything after the process path.
    pub fn tail(&self) -> &[OsString] {
        &self.args[1..]
    }

    /// NUL-terminated C representation.
    pub fn to_c_argv(&self) -> Result<CArgv, ArgumentError> {
        CArgv::new(&self.args)
    }
}

/// Builder for the runtime argument vector.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    args: Vec<OsString>,
}

impl ArgAssembler {
    /// Start with the invoking process path.
    pub fn new(process_path: impl Into<OsString>) -> Self {
        Self {
            args: vec![process_path.into()],
        }
    }

    /// Append every option in order.
    pub fn with_options(mut self, options: &OptionSet) -> Self {
        self.args
            .extend(options.iter().map(|o| o.as_os_str().to_os_string()));
        self
    }

    /// Append caller arguments, skipping the caller's own element 0.
    pub fn with_caller_args<A: AsRef<OsStr>>(mut self, caller_args: &[A]) -> Self {
        self.args
            .extend(caller_args.iter().skip(1).map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Build the final vector.
    pub fn build(self) -> ArgumentVector {
        ArgumentVector { args: self.args }
    }
}

/// Compose the runtime argument vector from the caller's argv and options.
///
/// `caller_args[0]` becomes the process path. An empty `caller_args` yields
/// an empty process path.
pub fn compose<A: AsRef<OsStr>>(caller_args: &[A], options: &OptionSet) -> ArgumentVector {
    let process_path = caller_args
        .first()
        .map(|a| a.as_ref().to_os_string())
        .unwrap_or_default();
    ArgAssembler::new(process_path)
        .with_options(options)
        .with_caller_args(caller_args)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{LaunchOption, OptionSource};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn options(items: &[&str]) -> OptionSet {
        OptionSet::new(
            items.iter().map(|s| LaunchOption::from(*s)).collect(),
            OptionSource::File,
        )
    }

    #[test]
    fn options_precede_caller_args() {
        let argv = compose(
            &strings(&["app.exe", "--verbose", "file.txt"]),
            &options(&["-Xmx512m", "-jar app.jar"]),
        );
        assert_eq!(
            argv.as_slice(),
            ["app.exe", "-Xmx512m", "-jar app.jar", "--verbose", "file.txt"]
        );
        assert_eq!(argv.process_path(), "app.exe");
    }

    #[test]
    fn length_is_one_plus_options_plus_caller_tail() {
        for o in 0..4 {
            for c in 1..4 {
                let opts: Vec<String> = (0..o).map(|i| format!("-o{i}")).collect();
                let caller: Vec<String> = (0..c).map(|i| format!("a{i}")).collect();
                let opt_refs: Vec<&str> = opts.iter().map(String::as_str).collect();
                let argv = compose(&caller, &options(&opt_refs));
                assert_eq!(argv.argc(), 1 + o + (c - 1));
                let expected_opts: Vec<OsString> = opts.iter().map(OsString::from).collect();
                let expected_tail: Vec<OsString> = caller[1..].iter().map(OsString::from).collect();
                assert_eq!(&argv.as_slice()[1..=o], expected_opts.as_slice());
                assert_eq!(&argv.as_slice()[o + 1..], expected_tail.as_slice());
            }
        }
    }

    #[test]
    fn no_options_and_no_extra_args_is_just_the_process_path() {
        let argv = compose(&strings(&["app"]), &OptionSet::empty());
        assert_eq!(argv.as_slice(), ["app"]);
        assert!(argv.tail().is_empty());
    }

    #[test]
    fn nothing_is_deduplicated_or_reordered() {
        let argv = ArgAssembler::new("p")
            .with_options(&options(&["-Xmx1g", "-Xmx1g"]))
            .with_caller_args(&strings(&["p", "-Xmx2g"]))
            .build();
        assert_eq!(argv.tail(), ["-Xmx1g", "-Xmx1g", "-Xmx2g"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_caller_args_pass_through_byte_for_byte() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let raw = OsString::from_vec(b"a\xffb".to_vec());
        let caller = vec![OsString::from("app"), raw.clone()];
        let argv = compose(&caller, &options(&["-Xmx1g"]));

        assert_eq!(argv.tail(), [OsString::from("-Xmx1g"), raw]);
        let c_argv = argv.to_c_argv().unwrap();
        let last = unsafe { std::ffi::CStr::from_ptr(c_argv.as_ptrs()[2]) };
        assert_eq!(last.to_bytes(), argv.tail()[1].as_bytes());
        assert_eq!(last.to_bytes(), b"a\xffb");
    }
}
