//! Console prompt helpers.
//!
//! [`Console`] wraps a reader/writer pair so the menu flows can be driven by
//! scripted input in tests and by locked stdin/stdout in the binary.

use std::io::{self, BufRead, Write};

use super::terminal;

/// A blocking line-oriented console.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns the writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes a single line.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Writes a dashed separator between records.
    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", "-".repeat(terminal::rule_width()))
    }

    /// Writes a `=` frame line around a block of output.
    pub fn frame(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", "=".repeat(terminal::rule_width()))
    }

    /// Prompts for one line of input.
    ///
    /// The label is written without a trailing newline and the writer is
    /// flushed before reading. Returns `None` on end of input; trailing
    /// newline characters are stripped from the result.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts for a number, re-prompting until one parses.
    ///
    /// Malformed input is a recoverable, local condition: the offending line
    /// is discarded, a message is printed, and the prompt repeats. Returns
    /// `None` on end of input.
    pub fn prompt_number(&mut self, label: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(text) = self.prompt(label)? else {
                return Ok(None);
            };
            match text.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.line("Invalid input. Please try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<&[u8]>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes()), Vec::new())
    }

    #[test]
    fn prompt_strips_line_endings() {
        let mut console = console("Alice\r\n");
        assert_eq!(console.prompt("name: ").unwrap(), Some("Alice".to_string()));
    }

    #[test]
    fn prompt_returns_none_at_eof() {
        let mut console = console("");
        assert_eq!(console.prompt("name: ").unwrap(), None);
    }

    #[test]
    fn prompt_number_recovers_from_garbage() {
        let mut console = console("abc\n-3\n42\n");
        assert_eq!(console.prompt_number("Option: ").unwrap(), Some(42));

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(
            output.matches("Invalid input. Please try again.").count(),
            2
        );
    }

    #[test]
    fn prompt_number_returns_none_when_input_runs_out() {
        let mut console = console("garbage\n");
        assert_eq!(console.prompt_number("Option: ").unwrap(), None);
    }
}
