use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use super::validate;

/// Interactive console over any reader/writer pair. Binaries hand it locked
/// stdin/stdout; tests drive it with a `Cursor` and capture into a `Vec<u8>`.
///
/// Input is consumed token by token: a line is split on whitespace and the
/// tokens are queued, so several values typed on one line are used one per
/// prompt.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    pub fn writeln(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Next whitespace-delimited token. Running out of input is an error:
    /// every prompt in both programs expects an answer.
    pub fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended while a value was expected",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn prompt_token(&mut self, prompt: &str) -> io::Result<String> {
        self.writeln(prompt)?;
        self.next_token()
    }

    /// Prompt until the answer parses, printing `error` for each rejected token.
    pub fn prompt_positive_int(&mut self, prompt: &str, error: &str) -> io::Result<usize> {
        loop {
            self.writeln(prompt)?;
            let token = self.next_token()?;
            match validate::parse_positive_int(&token) {
                Ok(n) => return Ok(n),
                Err(_) => self.writeln(error)?,
            }
        }
    }

    pub fn prompt_int(&mut self, prompt: &str, error: &str) -> io::Result<i32> {
        loop {
            self.writeln(prompt)?;
            let token = self.next_token()?;
            match validate::parse_int(&token) {
                Ok(n) => return Ok(n),
                Err(_) => self.writeln(error)?,
            }
        }
    }

    pub fn prompt_nonneg_int(&mut self, prompt: &str, error: &str) -> io::Result<usize> {
        loop {
            self.writeln(prompt)?;
            let token = self.next_token()?;
            match validate::parse_int(&token) {
                Ok(n) if n >= 0 => return Ok(n as usize),
                _ => self.writeln(error)?,
            }
        }
    }

    pub fn prompt_char(&mut self, prompt: &str, error: &str) -> io::Result<char> {
        loop {
            self.writeln(prompt)?;
            let token = self.next_token()?;
            match validate::parse_char(&token) {
                Ok(c) => return Ok(c),
                Err(_) => self.writeln(error)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console<'a>(input: &str, out: &'a mut Vec<u8>) -> Console<Cursor<String>, &'a mut Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), out)
    }

    #[test]
    fn tokens_split_on_whitespace() {
        let mut out = Vec::new();
        let mut c = console("1 2\n3\n", &mut out);
        assert_eq!(c.next_token().unwrap(), "1");
        assert_eq!(c.next_token().unwrap(), "2");
        assert_eq!(c.next_token().unwrap(), "3");
        assert!(c.next_token().is_err());
    }

    #[test]
    fn positive_int_reprompts_until_valid() {
        let mut out = Vec::new();
        let mut c = console("x\n-4\n0\n7\n", &mut out);
        let n = c.prompt_positive_int("size?", "bad").unwrap();
        assert_eq!(n, 7);
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("bad").count(), 3);
        assert_eq!(printed.matches("size?").count(), 4);
    }

    #[test]
    fn nonneg_int_rejects_negative() {
        let mut out = Vec::new();
        let mut c = console("-1\n0\n", &mut out);
        assert_eq!(c.prompt_nonneg_int("mines?", "bad").unwrap(), 0);
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("bad").count(), 1);
    }

    #[test]
    fn char_prompt_skips_long_tokens() {
        let mut out = Vec::new();
        let mut c = console("ab\nq\n", &mut out);
        assert_eq!(c.prompt_char("char?", "bad").unwrap(), 'q');
    }
}
