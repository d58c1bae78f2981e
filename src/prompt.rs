//! Console input.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::core::LlmError;

pub const PROMPT_LABEL: &str = "Chat: ";

pub trait PromptSource {
    /// Block until one line of input is available and return it without the
    /// line terminator.
    fn read_prompt(&mut self) -> Result<String, LlmError>;
}

/// Prints [`PROMPT_LABEL`] to `output` and reads one line from `input`.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSource for ConsolePrompt<R, W> {
    fn read_prompt(&mut self) -> Result<String, LlmError> {
        self.output.write_all(PROMPT_LABEL.as_bytes())?;
        self.output.flush()?;

        let mut line = Vec::new();
        // EOF leaves `line` empty, which is passed through like an empty line
        self.input.read_until(b'\n', &mut line)?;
        strip_line_ending(&mut line);

        // Invalid UTF-8 is replaced, not rejected
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> (String, String) {
        read_bytes(input.as_bytes())
    }

    fn read_bytes(input: &[u8]) -> (String, String) {
        let mut prompt = ConsolePrompt::new(Cursor::new(input.to_vec()), Vec::new());
        let line = prompt.read_prompt().unwrap();
        let (_, out) = prompt.into_inner();
        (line, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_label_and_strips_newline() {
        let (line, out) = read("what is rust?\nsecond line\n");
        assert_eq!(line, "what is rust?");
        assert_eq!(out, "Chat: ");
    }

    #[test]
    fn strips_crlf() {
        assert_eq!(read("hello\r\n").0, "hello");
    }

    #[test]
    fn empty_line_passes_through() {
        assert_eq!(read("\n").0, "");
    }

    #[test]
    fn eof_yields_empty_prompt() {
        assert_eq!(read("").0, "");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let (line, out) = read_bytes(b"caf\xe9\n");
        assert_eq!(line, "caf\u{FFFD}");
        assert_eq!(out, "Chat: ");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(read("  spaced  \n").0, "  spaced  ");
    }
}
