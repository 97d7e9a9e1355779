//! Line-oriented prompt over any reader/writer pair.

use crate::catalog::Category;
use crate::navigator::{render_listing, Chooser, NavigateError};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Blocking console used by the command loop.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Prints `prompt` and reads one trimmed line; `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Chooser for Console<R, W> {
    fn choose(&mut self, listing: &[Category]) -> Option<String> {
        let shown = render_listing(listing).into_iter().try_for_each(|line| self.say(line));
        let answer = shown.and_then(|_| self.ask("Category number (blank to cancel): "));

        match answer {
            Ok(Some(input)) if !input.is_empty() => Some(input),
            Ok(_) => None,
            Err(e) => {
                warn!("Console error: {}", e);
                None
            }
        }
    }

    fn rejected(&mut self, error: &NavigateError) {
        if let Err(e) = self.say(error) {
            warn!("Console error: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_ask_reads_trimmed_lines() {
        let mut console = console("  json \ncsv\n");
        assert_eq!(console.ask("? ").unwrap(), Some("json".to_string()));
        assert_eq!(console.ask("? ").unwrap(), Some("csv".to_string()));
        assert_eq!(console.ask("? ").unwrap(), None);
        assert_eq!(output(console), "? ? ? ");
    }

    #[test]
    fn test_choose_shows_numbered_listing() {
        let mut console = console("2\n");
        let listing = vec![Category::new("1", "Fruits"), Category::new("2", "Dairy")];

        assert_eq!(console.choose(&listing), Some("2".to_string()));
        let out = output(console);
        assert!(out.starts_with("1. Fruits\n2. Dairy\n"));
    }

    #[test]
    fn test_choose_blank_or_eof_cancels() {
        let listing = vec![Category::new("1", "Fruits")];

        let mut blank = console("\n");
        assert_eq!(blank.choose(&listing), None);

        let mut eof = console("");
        assert_eq!(eof.choose(&listing), None);
    }

    #[test]
    fn test_rejected_prints_error() {
        let mut console = console("");
        console.rejected(&NavigateError::InvalidSelection { input: "9".to_string(), count: 2 });
        assert!(output(console).contains("invalid selection '9'"));
    }
}
