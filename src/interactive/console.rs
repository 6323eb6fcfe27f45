//! Terminal I/O context
//!
//! The game never touches stdin/stdout directly; it is handed a `Console`
//! that owns a line reader and a writer.

use std::io::{self, BufRead, Write};

/// Line-oriented reader/writer pair used by the game loop
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and read one line of input
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writer for rendering
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Release the reader and writer
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
