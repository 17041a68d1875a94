// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent construction of the value tree.
//!
//! ```text
//! document = [ value ] end-of-input
//! value    = false / true / null / number / string / array / object
//! array    = "[" [ value *( "," value ) ] "]"
//! object   = "{" [ member *( "," member ) ] "}"
//! member   = string ":" value
//! ```
//!
//! A production that fails drops whatever it already built before the error
//! propagates, so no partial tree escapes.

use alloc::vec::Vec;

use log::trace;

use crate::config::ParseConfig;
use crate::cursor::Cursor;
use crate::parse_error::{ErrKind, ErrorFlags, ParseError};
use crate::tokenizer::TokenKind;
use crate::value::{Member, Value};

/// Grammar driver pulling tokens from a [`Cursor`].
pub struct TreeBuilder<'c> {
    cursor: &'c mut Cursor,
    max_depth: Option<usize>,
    depth: usize,
}

/// Appends a node, reporting a refused reservation instead of aborting.
fn push_node<T>(nodes: &mut Vec<T>, node: T, position: usize) -> Result<(), ParseError> {
    nodes
        .try_reserve(1)
        .map_err(|e| ParseError::out_of_memory(e, position))?;
    nodes.push(node);
    Ok(())
}

impl<'c> TreeBuilder<'c> {
    pub fn new(cursor: &'c mut Cursor, config: &ParseConfig) -> Self {
        Self {
            cursor,
            max_depth: config.max_depth,
            depth: 0,
        }
    }

    /// Parses a whole document.
    ///
    /// `Ok(None)` is the empty document. Every failure carries
    /// [`ErrorFlags::PARSE`] in addition to its own flag.
    pub fn document(&mut self) -> Result<Option<Value>, ParseError> {
        if self.cursor.at_end() {
            return Ok(None);
        }
        self.document_value()
            .map(Some)
            .map_err(|e| e.raise(ErrorFlags::PARSE))
    }

    fn document_value(&mut self) -> Result<Value, ParseError> {
        let value = self.required_value()?;
        if !self.cursor.at_end() {
            return ParseError::err(ErrKind::TrailingContent, self.cursor.position());
        }
        Ok(value)
    }

    /// Tries each value alternative in turn.
    ///
    /// `Ok(None)` means no alternative matched; nothing was consumed and no
    /// error is raised, the caller decides.
    pub fn value(&mut self) -> Result<Option<Value>, ParseError> {
        let value = if self.cursor.consume(TokenKind::False) {
            Value::Bool(false)
        } else if self.cursor.consume(TokenKind::True) {
            Value::Bool(true)
        } else if self.cursor.consume(TokenKind::Null) {
            Value::Null
        } else if let Some(n) = self.cursor.consume_number() {
            Value::Number(n)
        } else if let Some(s) = self.cursor.consume_string() {
            Value::String(s)
        } else if self.cursor.lookahead(TokenKind::BeginArray, 0) {
            self.array()?
        } else if self.cursor.lookahead(TokenKind::BeginObject, 0) {
            self.object()?
        } else {
            return Ok(None);
        };
        Ok(Some(value))
    }

    fn required_value(&mut self) -> Result<Value, ParseError> {
        let position = self.cursor.position();
        match self.value()? {
            Some(value) => Ok(value),
            None => ParseError::err(ErrKind::ExpectedValue, position),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.max_depth.is_some_and(|max| self.depth >= max) {
            return ParseError::err(ErrKind::MaxDepthReached, self.cursor.position());
        }
        self.depth += 1;
        Ok(())
    }

    /// After a `,` the closing token is not allowed.
    fn reject_trailing_comma(&self, close: TokenKind) -> Result<(), ParseError> {
        if self.cursor.lookahead(close, 0) {
            return ParseError::err(ErrKind::TrailingComma, self.cursor.position());
        }
        Ok(())
    }

    fn array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.expect(TokenKind::BeginArray)?;
        trace!("array at depth {}", self.depth);

        let mut elements = Vec::new();
        if !self.cursor.consume(TokenKind::EndArray) {
            loop {
                let position = self.cursor.position();
                let element = self.required_value()?;
                push_node(&mut elements, element, position)?;
                if self.cursor.consume(TokenKind::EndArray) {
                    break;
                }
                self.cursor.expect(TokenKind::ValueSep)?;
                self.reject_trailing_comma(TokenKind::EndArray)?;
            }
        }

        self.depth -= 1;
        Ok(Value::Array(elements))
    }

    fn object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.expect(TokenKind::BeginObject)?;
        trace!("object at depth {}", self.depth);

        let mut members = Vec::new();
        if !self.cursor.consume(TokenKind::EndObject) {
            loop {
                let position = self.cursor.position();
                let member = self.member()?;
                push_node(&mut members, member, position)?;
                if self.cursor.consume(TokenKind::EndObject) {
                    break;
                }
                self.cursor.expect(TokenKind::ValueSep)?;
                self.reject_trailing_comma(TokenKind::EndObject)?;
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }

    fn member(&mut self) -> Result<Member, ParseError> {
        let key = self.cursor.expect_string()?;
        self.cursor.expect(TokenKind::NameSep)?;
        trace!("member {:?}", key);
        let value = self.required_value()?;
        Ok(Member { key, value })
    }
}
