// SPDX-License-Identifier: Apache-2.0

use log::debug;

use crate::config::ParseConfig;
use crate::cursor::Cursor;
use crate::parse_error::ParseError;
use crate::tokenizer::tokenize;
use crate::tree_builder::TreeBuilder;
use crate::value::Value;

/// Parses a complete JSON document into an owned [`Value`] tree.
///
/// Parsing runs in two passes: the whole input is tokenized first, then the
/// tree is built from the token sequence. The parser borrows the input only
/// until [`parse`](Self::parse) returns; the resulting tree owns all its data.
pub struct Parser<'a> {
    input: &'a [u8],
    config: ParseConfig,
}

impl<'a> Parser<'a> {
    /// Creates a parser with the default [`ParseConfig`].
    ///
    /// # Example
    /// ```
    /// use rdjson::Parser;
    /// let value = Parser::new(r#"{"name": "value"}"#).parse().unwrap();
    /// assert!(value.is_some());
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a parser from a byte slice.
    ///
    /// String payloads must decode to valid UTF-8; anything else fails with
    /// [`ErrKind::InvalidUtf8`](crate::ErrKind::InvalidUtf8).
    ///
    /// # Example
    /// ```
    /// # use rdjson::Parser;
    /// let value = Parser::new_from_slice(b"[1, 2]").parse().unwrap();
    /// assert_eq!(value.unwrap().as_array().map(<[_]>::len), Some(2));
    /// ```
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_config_from_slice(input, ParseConfig::default())
    }

    /// Creates a parser with explicit limits.
    ///
    /// # Arguments
    /// * `input` - The JSON text.
    /// * `config` - Nesting limit to enforce, see [`ParseConfig`].
    pub fn with_config(input: &'a str, config: ParseConfig) -> Self {
        Self::with_config_from_slice(input.as_bytes(), config)
    }

    /// Core constructor all others delegate to.
    pub fn with_config_from_slice(input: &'a [u8], config: ParseConfig) -> Self {
        Parser { input, config }
    }

    /// Runs both passes.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - the document root.
    /// * `Ok(None)` - the input was empty or only whitespace.
    /// * `Err(e)` - the first failure; `e.flags()` records every stage it
    ///   passed through.
    ///
    /// Tokens the builder did not consume are released before returning,
    /// on success and on failure alike.
    pub fn parse(self) -> Result<Option<Value>, ParseError> {
        let tokens = tokenize(self.input)?;
        debug!("parsing {} tokens, {:?}", tokens.len(), self.config);
        let mut cursor = Cursor::new(tokens);
        let result = TreeBuilder::new(&mut cursor, &self.config).document();
        match &result {
            Ok(Some(value)) => debug!("parsed document root: {}", value.kind_name()),
            Ok(None) => debug!("empty document"),
            Err(e) => debug!("parse failed: {}", e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_error::{ErrKind, ErrorFlags};
    use crate::value::Member;
    use alloc::vec;
    use test_log::test;

    #[test]
    fn make_parser() {
        let value = Parser::new(r#"{"key": "value"}"#).parse();
        assert_eq!(
            value,
            Ok(Some(Value::Object(vec![Member::new(
                "key",
                Value::String("value".into())
            )])))
        );
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert_eq!(Parser::new("").parse(), Ok(None));
        assert_eq!(Parser::new_from_slice(b"\n\r\t ").parse(), Ok(None));
    }

    #[test]
    fn tokenizer_failure_skips_parse_flag() {
        let e = Parser::new("[1, @]").parse().unwrap_err();
        assert_eq!(e.kind(), ErrKind::InvalidToken);
        assert_eq!(e.flags(), ErrorFlags::TOKENIZE);
        assert_eq!(e.position(), 4);
    }

    #[test]
    fn grammar_failure_carries_parse_flag() {
        let e = Parser::new("[1, 2, ]").parse().unwrap_err();
        assert_eq!(e.flags(), ErrorFlags::PARSE);
        assert!(!e.flags().contains(ErrorFlags::TOKENIZE));
    }

    #[test]
    fn config_is_honoured() {
        let input = "[[[]]]";
        assert!(Parser::with_config(input, ParseConfig::with_max_depth(3))
            .parse()
            .is_ok());
        let e = Parser::with_config(input, ParseConfig::with_max_depth(1))
            .parse()
            .unwrap_err();
        assert_eq!(e.kind(), ErrKind::MaxDepthReached);
        assert_eq!(e.position(), 1);
    }

    #[test]
    fn tree_outlives_input() {
        let value = {
            let text = alloc::string::String::from(r#"["owned"]"#);
            Parser::new(&text).parse().unwrap()
        };
        assert_eq!(
            value,
            Some(Value::Array(vec![Value::String("owned".into())]))
        );
    }
}
