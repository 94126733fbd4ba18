use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;

/// Yes/no prompt over any buffered reader.
///
/// Answers are read one whitespace-delimited token at a time, so `"y n"` on a
/// single line answers two prompts. Only the exact token `y` means yes.
pub struct Prompt<R> {
    input: R,
    pending: Vec<String>,
    auto_confirm: bool,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
            auto_confirm: false,
        }
    }

    /// Answer every question with `y` without reading input.
    pub fn auto_confirm(mut self, yes: bool) -> Self {
        self.auto_confirm = yes;
        self
    }

    pub fn confirm(&mut self, question: &str, out: &mut dyn Write) -> Result<bool> {
        write!(out, "{}", question)?;
        out.flush()?;

        if self.auto_confirm {
            writeln!(out, "y")?;
            return Ok(true);
        }

        let answer = self.next_token()?;
        debug!(?answer, "prompt answered");
        Ok(answer.as_deref() == Some("y"))
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so garbage
    /// input is just a token that isn't `y`.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Stored reversed so tokens pop off in reading order.
            self.pending = String::from_utf8_lossy(&line)
                .split_whitespace()
                .rev()
                .map(str::to_string)
                .collect();
        }
        Ok(self.pending.pop())
    }
}
