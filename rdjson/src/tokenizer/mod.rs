// SPDX-License-Identifier: Apache-2.0

use alloc::collections::VecDeque;
use alloc::string::String;

use log::{debug, trace};

use crate::escape_processor::EscapeProcessor;
use crate::number_parser::parse_number;
use crate::parse_error::{ErrKind, ErrorFlags, ParseError};

/// Kind of a token, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    False,
    True,
    Null,
    Number,
    String,
    /// `[`
    BeginArray,
    /// `,`
    ValueSep,
    /// `]`
    EndArray,
    /// `{`
    BeginObject,
    /// `:`
    NameSep,
    /// `}`
    EndObject,
    /// Sentinel closing every token sequence.
    EndOfInput,
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            TokenKind::False => "false",
            TokenKind::True => "true",
            TokenKind::Null => "null",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::BeginArray => "'['",
            TokenKind::ValueSep => "','",
            TokenKind::EndArray => "']'",
            TokenKind::BeginObject => "'{'",
            TokenKind::NameSep => "':'",
            TokenKind::EndObject => "'}'",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(s)
    }
}

/// A lexical unit, carrying its decoded payload for numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    False,
    True,
    Null,
    Number(f64),
    String(String),
    BeginArray,
    ValueSep,
    EndArray,
    BeginObject,
    NameSep,
    EndObject,
    EndOfInput,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::False => TokenKind::False,
            Token::True => TokenKind::True,
            Token::Null => TokenKind::Null,
            Token::Number(_) => TokenKind::Number,
            Token::String(_) => TokenKind::String,
            Token::BeginArray => TokenKind::BeginArray,
            Token::ValueSep => TokenKind::ValueSep,
            Token::EndArray => TokenKind::EndArray,
            Token::BeginObject => TokenKind::BeginObject,
            Token::NameSep => TokenKind::NameSep,
            Token::EndObject => TokenKind::EndObject,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

/// A token together with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub offset: usize,
}

/// Insertion-ordered tokens, always terminated by [`Token::EndOfInput`].
#[derive(Debug, Default, PartialEq)]
pub struct TokenSequence {
    lexemes: VecDeque<Lexeme>,
}

impl TokenSequence {
    fn push(&mut self, token: Token, offset: usize) -> Result<(), ParseError> {
        self.lexemes
            .try_reserve(1)
            .map_err(|e| ParseError::out_of_memory(e, offset))?;
        trace!("token {:?} at {}", token, offset);
        self.lexemes.push_back(Lexeme { token, offset });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Lexeme> {
        self.lexemes.get(index)
    }

    pub fn front(&self) -> Option<&Lexeme> {
        self.lexemes.front()
    }

    /// Removes and hands out the first token.
    pub fn pop_front(&mut self) -> Option<Lexeme> {
        self.lexemes.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.lexemes.iter().map(|l| l.token.kind())
    }
}

/// Fixed-spelling tokens in match priority order.
const FIXED_TOKENS: [(&[u8], Token); 9] = [
    (b"false", Token::False),
    (b"true", Token::True),
    (b"null", Token::Null),
    (b"[", Token::BeginArray),
    (b"]", Token::EndArray),
    (b",", Token::ValueSep),
    (b"{", Token::BeginObject),
    (b":", Token::NameSep),
    (b"}", Token::EndObject),
];

/// Single left-to-right scanner over the input bytes.
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    tokens: TokenSequence,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Tokenizer {
            input,
            pos: 0,
            tokens: TokenSequence::default(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.input.get(self.pos) {
            self.pos += 1;
        }
    }

    fn fixed_token(&self) -> Option<(Token, usize)> {
        let rest = &self.input[self.pos..];
        FIXED_TOKENS
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))
            .map(|(spelling, token)| (token.clone(), spelling.len()))
    }

    fn next_token(&mut self, c: u8) -> Result<(), ParseError> {
        let start = self.pos;
        if let Some((token, len)) = self.fixed_token() {
            self.pos += len;
            return self.tokens.push(token, start);
        }
        match c {
            b'-' | b'0'..=b'9' => {
                let (number, end) = parse_number(self.input, start)?;
                self.pos = end;
                self.tokens.push(Token::Number(number), start)
            }
            b'"' => {
                let (string, end) = EscapeProcessor::decode_string(self.input, start)?;
                self.pos = end;
                self.tokens.push(Token::String(string), start)
            }
            _ => ParseError::err(ErrKind::InvalidToken, start),
        }
    }

    /// Runs the scan to completion.
    ///
    /// On failure every token built so far is dropped and the error carries
    /// [`ErrorFlags::TOKENIZE`].
    pub fn run(mut self) -> Result<TokenSequence, ParseError> {
        let result = self.scan();
        match result {
            Ok(()) => {
                debug!("tokenized {} bytes into {} tokens", self.pos, self.tokens.len());
                Ok(self.tokens)
            }
            Err(e) => {
                let e = e.raise(ErrorFlags::TOKENIZE);
                debug!("tokenize failed: {}", e);
                Err(e)
            }
        }
    }

    fn scan(&mut self) -> Result<(), ParseError> {
        loop {
            self.skip_whitespace();
            match self.input.get(self.pos) {
                Some(&c) => self.next_token(c)?,
                None => return self.tokens.push(Token::EndOfInput, self.pos),
            }
        }
    }
}

/// Splits `input` into tokens ending with the end-of-input sentinel.
pub fn tokenize(input: &[u8]) -> Result<TokenSequence, ParseError> {
    Tokenizer::new(input).run()
}
