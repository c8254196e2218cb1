//! Line-oriented console seam between the interactive flows and stdio.

use std::io::{self, BufRead, Write};

/// Blocking line console used by every interactive component.
///
/// Menus and selectors talk to the user only through this trait, so the
/// whole interaction protocol runs against scripted lines in tests.
pub trait Console {
    /// Prints a block of text followed by a newline.
    fn say(&mut self, text: &str);

    /// Prints `prompt` without a trailing newline and reads one line of
    /// input, trimmed of surrounding whitespace.
    ///
    /// An error here means the input stream itself is gone (not bad
    /// input) and ends the enclosing loop.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Console over the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a stdio-backed console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn say(&mut self, text: &str) {
        println!("{text}");
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}
