use std::fs;
use std::path::Path;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::SumError;

/// The lines of an input file, after the whole content has been trimmed once.
pub struct InputSequence<'a> {
    content: &'a str,
    /// Number of lines removed by the leading trim, so errors can point at the real line.
    line_offset: usize,
}

impl<'a> InputSequence<'a> {
    pub fn new(content: &'a str) -> Self {
        let trimmed_start = content.trim_start();
        let leading = &content[..content.len() - trimmed_start.len()];
        InputSequence {
            content: trimmed_start.trim_end(),
            line_offset: split_lines(leading).count() - 1,
        }
    }

    /// Returns each line along with its 1-based line number in the original content.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        let offset = self.line_offset;
        let lines = (!self.content.is_empty()).then(|| split_lines(self.content));
        lines
            .into_iter()
            .flatten()
            .enumerate()
            .map(move |(i, text)| (offset + i + 1, text))
    }

    pub fn len(&self) -> usize {
        self.lines().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Parses every line and adds them up. Stops at the first line that isn't an integer.
    pub fn sum(&self) -> Result<BigInt, SumError> {
        if self.is_empty() {
            log::debug!("No lines to sum");
        } else {
            log::debug!("Summing {} lines", self.len());
        }
        let mut total = BigInt::zero();
        for (line, text) in self.lines() {
            total += parse_integer(line, text)?;
        }
        Ok(total)
    }
}

/// Splits on `\n`, `\r\n` and a lone `\r`. Always yields at least one (possibly empty) piece.
fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(s);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(i) => {
                let end = if current[i..].starts_with("\r\n") { i + 2 } else { i + 1 };
                rest = Some(&current[end..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Parses a base-10 literal: optional sign followed by ASCII digits. Padding around the literal is
/// allowed, but an empty line is not.
fn parse_integer(line: usize, text: &str) -> Result<BigInt, SumError> {
    let malformed = || SumError::MalformedLine {
        line,
        text: text.to_string(),
    };
    let literal = text.trim();
    let (sign, digits) = match literal.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &literal[1..]),
        Some(b'+') => (Sign::Plus, &literal[1..]),
        _ => (Sign::Plus, literal),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(malformed)?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Sums the integers in already-loaded file content.
pub fn sum_content(content: &str) -> Result<BigInt, SumError> {
    InputSequence::new(content).sum()
}

/// Reads the file at `path` and returns the sum of the integers on its lines.
pub fn load_and_sum<P: AsRef<Path>>(path: P) -> Result<BigInt, SumError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SumError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", content.len(), path.display());
    sum_content(&content)
}
