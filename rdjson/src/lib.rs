// SPDX-License-Identifier: Apache-2.0

//! A recursive-descent JSON parser producing an owned value tree.
//!
//! Input is processed in two passes: a tokenizer turns the text into a
//! sequence of tokens (decoding numbers and string escapes on the way), then a
//! tree builder consumes that sequence and assembles a [`Value`].
//!
//! ```
//! use rdjson::{ErrorFlags, Value};
//!
//! let value = rdjson::parse(r#"[{"m": 3}, 3.4e2]"#).unwrap().unwrap();
//! assert_eq!(value.as_array().unwrap()[1], Value::Number(340.0));
//!
//! let err = rdjson::parse("[1, 2, ]").unwrap_err();
//! assert!(err.flags().contains(ErrorFlags::PARSE));
//! ```
//!
//! Failures are reported as a [`ParseError`] whose [`ErrorFlags`] record
//! every stage the failure passed through, e.g. a `\u` escape yields
//! `TOKENIZE | UNSUPPORTED`.
//!
//! The crate is `no_std` + `alloc`; the default `std` feature only adds the
//! `std::error::Error` impl.

#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod config;
mod cursor;
mod escape_processor;
mod number_parser;
mod parse_error;
mod parser;
mod string_buffer;
mod tokenizer;
mod tree_builder;
mod value;

pub use config::ParseConfig;
pub use cursor::Cursor;
pub use parse_error::{ErrKind, ErrorFlags, ParseError};
pub use parser::Parser;
pub use string_buffer::{Error as BufferError, StringBuffer};
pub use tokenizer::{tokenize, Lexeme, Token, TokenKind, TokenSequence, Tokenizer};
pub use tree_builder::TreeBuilder;
pub use value::{Member, Value};

/// Parses `input` with the default [`ParseConfig`].
///
/// Returns `Ok(None)` for an empty or whitespace-only document.
pub fn parse(input: &str) -> Result<Option<Value>, ParseError> {
    Parser::new(input).parse()
}

/// Parses a byte slice with the default [`ParseConfig`].
pub fn parse_slice(input: &[u8]) -> Result<Option<Value>, ParseError> {
    Parser::new_from_slice(input).parse()
}

/// Parses `input` under the limits in `config`.
pub fn parse_with_config(input: &str, config: ParseConfig) -> Result<Option<Value>, ParseError> {
    Parser::with_config(input, config).parse()
}
