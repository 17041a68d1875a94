// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use log::trace;

use crate::parse_error::{ErrKind, ParseError};
use crate::tokenizer::{Lexeme, Token, TokenKind, TokenSequence};

/// Reader over a token sequence.
///
/// Every successful consume advances by exactly one token and drops it;
/// tokens are never revisited. The end-of-input sentinel is never consumed,
/// so the cursor always has a current token. Dropping the cursor releases
/// whatever was not consumed.
#[derive(Debug)]
pub struct Cursor {
    tokens: TokenSequence,
}

impl Cursor {
    pub fn new(tokens: TokenSequence) -> Self {
        Self { tokens }
    }

    fn current(&self) -> Option<&Lexeme> {
        self.tokens.front()
    }

    /// Kind of the current token. A sequence missing its sentinel reads as
    /// already at the end.
    pub fn current_kind(&self) -> TokenKind {
        self.current()
            .map_or(TokenKind::EndOfInput, |l| l.token.kind())
    }

    /// Byte offset of the current token.
    pub fn position(&self) -> usize {
        self.current().map_or(0, |l| l.offset)
    }

    /// Number of tokens not yet consumed, including the sentinel.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::EndOfInput
    }

    fn advance(&mut self) -> Option<Token> {
        if self.at_end() {
            return None;
        }
        let lexeme = self.tokens.pop_front()?;
        trace!("consumed {:?} at {}", lexeme.token, lexeme.offset);
        Some(lexeme.token)
    }

    /// Advances if the current token is of `kind`.
    pub fn consume(&mut self, kind: TokenKind) -> bool {
        if self.current_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn consume_number(&mut self) -> Option<f64> {
        let number = match self.current()?.token {
            Token::Number(n) => n,
            _ => return None,
        };
        self.advance();
        Some(number)
    }

    pub fn consume_string(&mut self) -> Option<String> {
        if self.current_kind() != TokenKind::String {
            return None;
        }
        match self.advance()? {
            Token::String(s) => Some(s),
            _ => None,
        }
    }

    /// Like [`consume`](Self::consume), but a mismatch is a parse error.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.consume(kind) {
            Ok(())
        } else {
            ParseError::err(ErrKind::ExpectedToken(kind), self.position())
        }
    }

    pub fn expect_string(&mut self) -> Result<String, ParseError> {
        let position = self.position();
        self.consume_string()
            .ok_or(ParseError::new(ErrKind::ExpectedString, position))
    }

    /// Peeks `n` tokens past the current one without consuming.
    ///
    /// `lookahead(kind, 0)` tests the current token. Returns false when the
    /// sequence ends before depth `n`.
    pub fn lookahead(&self, kind: TokenKind, n: usize) -> bool {
        self.tokens
            .get(n)
            .is_some_and(|l| l.token.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_error::ErrorFlags;
    use crate::tokenizer::tokenize;
    use test_log::test;

    fn cursor(input: &str) -> Cursor {
        Cursor::new(tokenize(input.as_bytes()).unwrap())
    }

    #[test]
    fn test_empty_sequence_is_at_end() {
        let mut c = cursor("   ");
        assert!(c.at_end());
        assert_eq!(c.remaining(), 1);
        assert!(c.consume(TokenKind::EndOfInput));
        assert!(c.at_end());
        assert_eq!(c.remaining(), 1);
    }

    #[test]
    fn test_consume_matching_advances() {
        let mut c = cursor("[ true ]");
        assert_eq!(c.remaining(), 4);
        assert!(!c.consume(TokenKind::True));
        assert_eq!(c.remaining(), 4);
        assert!(c.consume(TokenKind::BeginArray));
        assert!(c.consume(TokenKind::True));
        assert!(c.consume(TokenKind::EndArray));
        assert!(c.at_end());
        assert_eq!(c.remaining(), 1);
    }

    #[test]
    fn test_consume_payloads() {
        let mut c = cursor(r#"-2.5E+14 "hello""#);
        assert_eq!(c.consume_string(), None);
        assert_eq!(c.consume_number(), Some(-2.5e14));
        assert_eq!(c.consume_number(), None);
        assert_eq!(c.consume_string(), Some("hello".into()));
        assert!(c.at_end());
    }

    #[test]
    fn test_expect_mismatch_is_parse_error() {
        let mut c = cursor(r#"{ "a" 1 }"#);
        assert_eq!(c.expect(TokenKind::BeginObject), Ok(()));
        assert_eq!(c.expect_string(), Ok("a".into()));
        let e = c.expect(TokenKind::NameSep).unwrap_err();
        assert_eq!(e.kind(), ErrKind::ExpectedToken(TokenKind::NameSep));
        assert_eq!(e.flags(), ErrorFlags::PARSE);
        assert_eq!(e.position(), 6);
        // a failed expect does not advance
        assert_eq!(c.consume_number(), Some(1.0));
    }

    #[test]
    fn test_expect_string_mismatch() {
        let mut c = cursor("{ true: {} }");
        c.expect(TokenKind::BeginObject).unwrap();
        let e = c.expect_string().unwrap_err();
        assert_eq!(e.kind(), ErrKind::ExpectedString);
        assert_eq!(e.position(), 2);
        assert_eq!(c.current_kind(), TokenKind::True);
    }

    #[test]
    fn test_lookahead() {
        let c = cursor("[1, 2]");
        assert!(c.lookahead(TokenKind::BeginArray, 0));
        assert!(c.lookahead(TokenKind::Number, 1));
        assert!(c.lookahead(TokenKind::ValueSep, 2));
        assert!(!c.lookahead(TokenKind::ValueSep, 3));
        assert!(c.lookahead(TokenKind::EndOfInput, 5));
        assert!(!c.lookahead(TokenKind::EndOfInput, 6));
        assert_eq!(c.remaining(), 6);
    }

    #[test]
    fn test_position_tracks_current_token() {
        let mut c = cursor("  null   true");
        assert_eq!(c.position(), 2);
        assert!(c.consume(TokenKind::Null));
        assert_eq!(c.position(), 9);
        assert!(c.consume(TokenKind::True));
        assert_eq!(c.position(), 13);
    }
}
