// SPDX-License-Identifier: Apache-2.0

//! Number matching for the tokenizer.
//!
//! A number token starts at `-` or an ASCII digit and extends over the longest
//! prefix that reads as a decimal floating-point literal:
//!
//! ```text
//! -? digits* ( . digits* )? ( [eE] [+-]? digits+ )?
//! ```
//!
//! with at least one mantissa digit. This is the decimal subset a C float
//! routine accepts, so `021`, `1.` and `-.5` are numbers, while an exponent
//! marker without digits (`1e`) ends the token before the `e`.

use crate::parse_error::{ErrKind, ParseError};

fn digits(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(bytes.len())
}

/// Returns the length of the number literal at the start of `bytes`,
/// or 0 if there is none.
pub fn scan_number(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    let integer = digits(&bytes[pos..]);
    pos += integer;

    let mut fraction = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction = digits(&bytes[pos + 1..]);
        if integer + fraction > 0 {
            pos += 1 + fraction;
        }
    }

    if integer + fraction == 0 {
        return 0;
    }

    if let Some(b'e' | b'E') = bytes.get(pos) {
        let mut exp = pos + 1;
        if let Some(b'+' | b'-') = bytes.get(exp) {
            exp += 1;
        }
        let exp_digits = digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

/// Matches and converts the number starting at `start`.
///
/// Returns the value and the offset just past the literal.
pub fn parse_number(input: &[u8], start: usize) -> Result<(f64, usize), ParseError> {
    let len = scan_number(&input[start..]);
    if len == 0 {
        return ParseError::err(ErrKind::InvalidNumber, start);
    }
    let end = start + len;
    let literal = core::str::from_utf8(&input[start..end])
        .map_err(|_| ParseError::new(ErrKind::InvalidNumber, start))?;
    let value = literal
        .parse::<f64>()
        .map_err(|_| ParseError::new(ErrKind::InvalidNumber, start))?;
    Ok((value, end))
}
