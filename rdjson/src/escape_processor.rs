// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use crate::parse_error::{ErrKind, ParseError};
use crate::string_buffer::{self, StringBuffer};

/// Decoding of quoted string literals.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, `UnicodeEscape` for `u`, or `InvalidEscape` otherwise.
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ErrKind> {
        match escape_char {
            b'"' => Ok(b'"'),
            b'\\' => Ok(b'\\'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            b'n' => Ok(b'\n'),
            b'r' => Ok(b'\r'),
            b't' => Ok(b'\t'),
            b'u' => Err(ErrKind::UnicodeEscape),
            other => Err(ErrKind::InvalidEscape(other)),
        }
    }

    /// Decodes the string literal whose opening quote is at `start`.
    ///
    /// Plain bytes are copied verbatim. Returns the decoded string and the
    /// offset just past the closing quote.
    pub fn decode_string(input: &[u8], start: usize) -> Result<(String, usize), ParseError> {
        if input.get(start) != Some(&b'"') {
            return ParseError::err(ErrKind::ExpectedString, start);
        }

        let mut buffer = StringBuffer::new();
        let mut pos = start + 1;
        loop {
            let byte = match input.get(pos) {
                Some(&b'"') => break,
                Some(&b'\\') => {
                    let escape_char = *input
                        .get(pos + 1)
                        .ok_or(ParseError::new(ErrKind::UnterminatedString, input.len()))?;
                    let decoded = Self::process_simple_escape(escape_char)
                        .map_err(|kind| ParseError::new(kind, pos))?;
                    pos += 1;
                    decoded
                }
                Some(&byte) => byte,
                None => return ParseError::err(ErrKind::UnterminatedString, input.len()),
            };
            buffer.append(byte).map_err(|e| Self::buffer_error(e, pos))?;
            pos += 1;
        }

        let decoded = buffer.finalize().map_err(|e| Self::buffer_error(e, start))?;
        Ok((decoded, pos + 1))
    }

    fn buffer_error(error: string_buffer::Error, position: usize) -> ParseError {
        match error {
            string_buffer::Error::OutOfMemory(e) => ParseError::out_of_memory(e, position),
            string_buffer::Error::InvalidUtf8 => ParseError::new(ErrKind::InvalidUtf8, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_error::ErrorFlags;
    use test_log::test;

    fn decode(input: &[u8]) -> Result<(String, usize), ParseError> {
        EscapeProcessor::decode_string(input, 0)
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Ok(b'\n'));
        assert_eq!(EscapeProcessor::process_simple_escape(b't'), Ok(b'\t'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'r'), Ok(b'\r'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'b'), Ok(0x08));
        assert_eq!(EscapeProcessor::process_simple_escape(b'f'), Ok(0x0C));
        assert_eq!(EscapeProcessor::process_simple_escape(b'/'), Ok(b'/'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'\\'), Ok(b'\\'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'"'), Ok(b'"'));
    }

    #[test]
    fn test_unknown_and_unicode_escapes() {
        assert_eq!(
            EscapeProcessor::process_simple_escape(b'a'),
            Err(ErrKind::InvalidEscape(b'a'))
        );
        assert_eq!(
            EscapeProcessor::process_simple_escape(b'u'),
            Err(ErrKind::UnicodeEscape)
        );
    }

    #[test]
    fn test_decode_plain() {
        assert_eq!(decode(br#""hello world""#), Ok(("hello world".into(), 13)));
        assert_eq!(decode(br#""""#), Ok(("".into(), 2)));
    }

    #[test]
    fn test_decode_stops_at_closing_quote() {
        let input = br#""ab" , "cd""#;
        assert_eq!(decode(input), Ok(("ab".into(), 4)));
        assert_eq!(
            EscapeProcessor::decode_string(input, 7),
            Ok(("cd".into(), 11))
        );
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(
            decode(br#""  hello\n\tworld\\""#),
            Ok(("  hello\n\tworld\\".into(), 20))
        );
        assert_eq!(decode(br#""  \" ""#), Ok(("  \" ".into(), 7)));
        assert_eq!(decode(br#""a\/b""#), Ok(("a/b".into(), 6)));
    }

    #[test]
    fn test_decode_copies_control_bytes_verbatim() {
        assert_eq!(decode(b"\"a\tb\""), Ok(("a\tb".into(), 5)));
    }

    #[test]
    fn test_decode_unterminated() {
        let error = decode(br#""          test  "#).unwrap_err();
        assert_eq!(error.kind(), ErrKind::UnterminatedString);
        assert_eq!(error.flags(), ErrorFlags::TOKENIZE);

        let error = decode(br#""trailing backslash\"#).unwrap_err();
        assert_eq!(error.kind(), ErrKind::UnterminatedString);
    }

    #[test]
    fn test_decode_unicode_escape_unsupported() {
        let error = decode(br#"" \u3424  ""#).unwrap_err();
        assert_eq!(error.kind(), ErrKind::UnicodeEscape);
        assert_eq!(error.position(), 2);
        assert!(error.flags().contains(ErrorFlags::UNSUPPORTED));
    }

    #[test]
    fn test_decode_invalid_escape() {
        let error = decode(br#""   \a   ""#).unwrap_err();
        assert_eq!(error.kind(), ErrKind::InvalidEscape(b'a'));
        assert_eq!(error.position(), 4);
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let error = decode(b"\"\xff\"").unwrap_err();
        assert_eq!(error.kind(), ErrKind::InvalidUtf8);
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_decode_requires_opening_quote() {
        let error = decode(b"abc").unwrap_err();
        assert_eq!(error.kind(), ErrKind::ExpectedString);
    }
}
