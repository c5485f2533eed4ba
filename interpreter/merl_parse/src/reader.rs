//! Line-oriented source reader.
//!
//! Splits input into expression sequences delimited by a top-level `.`,
//! respecting strings (with backslash escapes) and `%` comments. Used by
//! the REPL and by `include`.

use std::io::{self, BufRead};

/// Reads expression sequences from a buffered input.
pub struct Reader<R> {
    input: R,
    /// Remainder of a line after a terminating `.`, served before the
    /// next read.
    cache: String,
    /// String state persists across lines (strings may span newlines).
    in_string: bool,
}

impl<R: BufRead> Reader<R> {
    pub fn new(input: R) -> Self {
        Reader {
            input,
            cache: String::new(),
            in_string: false,
        }
    }

    /// Return the next expression sequence, up to and including its
    /// terminating `.`, or `None` at end of input.
    pub fn next_sequence(&mut self) -> io::Result<Option<String>> {
        let mut out = String::new();
        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                // End of input. Hand back whatever is pending so the
                // parser can report the missing terminator.
                if out.trim().is_empty() {
                    return Ok(None);
                }
                return Ok(Some(out.trim().to_string()));
            }

            let mut in_comment = false;
            let mut escaped = false;
            for (i, c) in line.char_indices() {
                match c {
                    '"' if !in_comment && !escaped => self.in_string = !self.in_string,
                    '%' if !self.in_string && !escaped => in_comment = true,
                    '\\' => {
                        escaped = true;
                        continue;
                    }
                    '.' if !in_comment && !escaped && !self.in_string => {
                        let (head, rest) = line.split_at(i + 1);
                        self.cache = rest.to_string();
                        out.push_str(head);
                        return Ok(Some(out.trim().to_string()));
                    }
                    _ => {}
                }
                escaped = false;
            }

            out.push_str(&line);
        }
    }

    /// Read a line from the cache or the underlying input. An empty
    /// return means end of input.
    fn read_line(&mut self) -> io::Result<String> {
        if !self.cache.is_empty() {
            return Ok(std::mem::take(&mut self.cache));
        }
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}
