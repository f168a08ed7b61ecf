use std::io::{self, BufRead, Write};

use crate::domain::AppError;
use crate::ports::LinePrompt;

/// Line-oriented prompt over plain streams, used when stdin is not a terminal.
///
/// Each prompt is written on its own line; each answer is one input line with
/// the line terminator removed and nothing else altered.
pub struct StreamPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl StreamPrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StreamPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LinePrompt for StreamPrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt_over(input: &str) -> StreamPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        StreamPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn writes_prompt_and_reads_line() {
        let mut prompt = prompt_over("demo/a.png\nq\n");

        assert_eq!(prompt.read_line("first").unwrap(), Some("demo/a.png".to_string()));
        assert_eq!(prompt.read_line("second").unwrap(), Some("q".to_string()));

        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(output, "first\nsecond\n");
    }

    #[test]
    fn strips_crlf_but_keeps_other_whitespace() {
        let mut prompt = prompt_over(" demo/a.png \r\n\t\n");

        assert_eq!(prompt.read_line("p").unwrap(), Some(" demo/a.png ".to_string()));
        assert_eq!(prompt.read_line("p").unwrap(), Some("\t".to_string()));
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let mut prompt = prompt_over("demo/a.png");

        assert_eq!(prompt.read_line("p").unwrap(), Some("demo/a.png".to_string()));
        assert_eq!(prompt.read_line("p").unwrap(), None);
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut prompt = prompt_over("\n");

        assert_eq!(prompt.read_line("p").unwrap(), Some(String::new()));
        assert_eq!(prompt.read_line("p").unwrap(), None);
    }
}
