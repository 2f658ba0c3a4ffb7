//! Terminal rendition of the launcher dialogs.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::style::Stylize;

use crate::report::{Dialog, Reporter, UserChoice};

/// Prints dialogs to a writer and reads OK/Cancel answers from a reader.
pub struct ConsoleReporter<R, W> {
    input: R,
    output: W,
    interactive: bool,
    styled: bool,
}

impl ConsoleReporter<io::StdinLock<'static>, io::Stderr> {
    /// Reporter on stdin/stderr. A non-terminal stdin answers Cancel.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        let stderr = io::stderr();
        let styled = stderr.is_terminal();
        Self {
            input: stdin.lock(),
            output: stderr,
            interactive,
            styled,
        }
    }
}

impl<R: BufRead, W: Write> ConsoleReporter<R, W> {
    /// Unstyled, interactive reporter over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            interactive: true,
            styled: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self, dialog: &Dialog) -> io::Result<()> {
        if self.styled {
            writeln!(self.output, "{}", dialog.title.as_str().bold().red())?;
        } else {
            writeln!(self.output, "{}", dialog.title)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", dialog.body)?;
        writeln!(self.output)
    }

    fn ask(&mut self) -> io::Result<UserChoice> {
        if !self.interactive {
            return Ok(UserChoice::Cancel);
        }
        write!(self.output, "[OK/Cancel] ")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(parse_choice(&answer))
    }
}

impl<R: BufRead, W: Write> Reporter for ConsoleReporter<R, W> {
    fn report_runtime_missing(&mut self, dialog: &Dialog) -> UserChoice {
        let result = self.show(dialog).and_then(|()| self.ask());
        result.unwrap_or_else(|e| {
            tracing::warn!("Failed to prompt user: {e}");
            UserChoice::Cancel
        })
    }

    fn report_message(&mut self, dialog: &Dialog) {
        if let Err(e) = self.show(dialog).and_then(|()| self.output.flush()) {
            tracing::warn!("Failed to show message: {e}");
        }
    }
}

fn parse_choice(answer: &str) -> UserChoice {
    match answer.trim().to_ascii_lowercase().as_str() {
        "ok" | "o" | "y" | "yes" => UserChoice::Accept,
        _ => UserChoice::Cancel,
    }
}
