//! Line scanning shared by the barcode readers

use std::io::BufRead;

use super::ParseMode;
use crate::error::{BarcodeError, Result};

/// A record line: neither blank nor a comment
#[derive(Debug, Clone)]
pub(crate) struct ContentLine {
    /// 1-based line number in the source
    pub number: usize,
    pub text: String,
}

impl ContentLine {
    pub fn parse_error(&self, reason: impl Into<String>) -> BarcodeError {
        BarcodeError::Parse {
            line: self.number,
            content: self.text.clone(),
            reason: reason.into(),
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Extract the leading numeric fields named in `names`
    ///
    /// Strict: each field is one whitespace-separated token; a missing or
    /// non-finite token is an error.
    /// Lenient: fields are read like a stream extraction, taking the
    /// longest numeric prefix, so `1.0-2.0` yields 1.0 then -2.0. The
    /// first field with no numeric prefix and everything after it read
    /// as 0.0.
    pub fn numbers<const N: usize>(&self, names: [&str; N], mode: ParseMode) -> Result<[f64; N]> {
        match mode {
            ParseMode::Strict => self.strict_numbers(names),
            ParseMode::Lenient => Ok(self.lenient_numbers::<N>()),
        }
    }

    fn strict_numbers<const N: usize>(&self, names: [&str; N]) -> Result<[f64; N]> {
        let mut values = [0.0; N];
        let mut tokens = self.tokens();

        for (slot, name) in values.iter_mut().zip(names) {
            let token = tokens.next();
            *slot = match token.and_then(finite_number) {
                Some(v) => v,
                None => {
                    return Err(match token {
                        None => self.parse_error(format!("missing {name} value")),
                        Some(tok) => self.parse_error(format!("{name} '{tok}' is not a finite number")),
                    });
                }
            };
        }
        Ok(values)
    }

    fn lenient_numbers<const N: usize>(&self) -> [f64; N] {
        let mut values = [0.0; N];
        let mut rest = self.text.as_str();

        for slot in values.iter_mut() {
            match numeric_prefix(rest.trim_start()) {
                Some((v, remaining)) => {
                    *slot = v;
                    rest = remaining;
                }
                None => {
                    log::warn!(
                        "line {}: unreadable value in {:?}, substituting 0.0",
                        self.number, self.text
                    );
                    break;
                }
            }
        }
        values
    }
}

fn finite_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Longest prefix of `input` that reads as a finite number, and the rest
fn numeric_prefix(input: &str) -> Option<(f64, &str)> {
    let run = input
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(input.len());

    // The run is ASCII, so every byte offset is a char boundary.
    (1..=run).rev().find_map(|end| {
        input[..end].parse::<f64>().ok().map(|v| (v, end))
    })
    .filter(|(v, _)| v.is_finite())
    .map(|(v, end)| (v, &input[end..]))
}

/// Does this token spell an infinite value (`inf`, `-Infinity`, ...)?
pub(crate) fn is_infinite_token(token: &str) -> bool {
    token.parse::<f64>().map(f64::is_infinite).unwrap_or(false)
}

/// Iterator over the record lines of a buffered source
///
/// Each call reads a line first and only then checks for end of input,
/// so the last line is seen exactly once with or without a trailing
/// newline. Lines are split as raw bytes: blank and comment lines are
/// skipped whatever their encoding, and only record lines are decoded.
/// A record line that is not UTF-8 is a parse error in strict mode and
/// is decoded lossily in lenient mode.
pub(crate) struct ContentLines<R> {
    reader: R,
    mode: ParseMode,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> ContentLines<R> {
    pub fn new(reader: R, mode: ParseMode) -> Self {
        Self {
            reader,
            mode,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for ContentLines<R> {
    type Item = Result<ContentLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_no += 1;

            let mut bytes = self.buf.as_slice();
            while let Some((&(b'\n' | b'\r'), head)) = bytes.split_last() {
                bytes = head;
            }
            if bytes.iter().all(u8::is_ascii_whitespace) || bytes.first() == Some(&b'#') {
                continue;
            }

            let line = match std::str::from_utf8(bytes) {
                Ok(text) => ContentLine { number: self.line_no, text: text.to_string() },
                Err(_) => {
                    let line = ContentLine {
                        number: self.line_no,
                        text: String::from_utf8_lossy(bytes).into_owned(),
                    };
                    if self.mode == ParseMode::Strict {
                        return Some(Err(line.parse_error("not valid UTF-8")));
                    }
                    log::warn!("line {}: not valid UTF-8, decoding lossily", self.line_no);
                    line
                }
            };
            return Some(Ok(line));
        }
    }
}
