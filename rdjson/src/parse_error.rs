// SPDX-License-Identifier: Apache-2.0

use alloc::collections::TryReserveError;

use crate::tokenizer::TokenKind;

/// Set of failure classes raised during one parse attempt.
///
/// A single failure can carry several flags at once, e.g. an unsupported
/// `\u` escape is both a tokenize failure and an unsupported feature.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ErrorFlags(u8);

impl ErrorFlags {
    /// The input could not be split into tokens.
    pub const TOKENIZE: Self = Self(0x01);
    /// The token stream does not follow the JSON grammar.
    pub const PARSE: Self = Self(0x02);
    /// Memory for a token, node or string could not be reserved.
    pub const ALLOCATION: Self = Self(0x04);
    /// The input uses a feature this parser does not implement (`\uXXXX`).
    pub const UNSUPPORTED: Self = Self(0x08);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::TOKENIZE, "tokenize"),
        (Self::PARSE, "parse"),
        (Self::ALLOCATION, "allocation"),
        (Self::UNSUPPORTED, "unsupported"),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flags set in either operand; the `const` form of `|`.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl core::ops::BitOr for ErrorFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl core::ops::BitOrAssign for ErrorFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl core::fmt::Debug for ErrorFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ErrorFlags({:#04x}: {self})", self.0)
    }
}

impl core::fmt::Display for ErrorFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// What went wrong, independent of which stage reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    /// A byte that starts no token.
    InvalidToken,
    /// `-` or a digit that does not begin a number.
    InvalidNumber,
    /// Input ended before the closing quote.
    UnterminatedString,
    /// `\` followed by the given byte is not a known escape.
    InvalidEscape(u8),
    /// `\uXXXX` escapes are recognized but not decoded.
    UnicodeEscape,
    /// A decoded string is not valid UTF-8 (byte-slice input only).
    InvalidUtf8,
    /// A fallible reservation was refused.
    OutOfMemory,
    /// The grammar requires a token of this kind here.
    ExpectedToken(TokenKind),
    /// An object member must start with a string key.
    ExpectedString,
    /// No value could be parsed where one is required.
    ExpectedValue,
    /// A `,` directly followed by `]` or `}`.
    TrailingComma,
    /// Tokens remain after the document value.
    TrailingContent,
    /// Nesting exceeded the configured maximum depth.
    MaxDepthReached,
}

impl ErrKind {
    /// The flag a failure of this kind raises on its own.
    pub const fn flag(self) -> ErrorFlags {
        match self {
            ErrKind::InvalidToken
            | ErrKind::InvalidNumber
            | ErrKind::UnterminatedString
            | ErrKind::InvalidEscape(_)
            | ErrKind::InvalidUtf8 => ErrorFlags::TOKENIZE,
            ErrKind::UnicodeEscape => ErrorFlags::UNSUPPORTED,
            ErrKind::OutOfMemory => ErrorFlags::ALLOCATION,
            ErrKind::ExpectedToken(_)
            | ErrKind::ExpectedString
            | ErrKind::ExpectedValue
            | ErrKind::TrailingComma
            | ErrKind::TrailingContent
            | ErrKind::MaxDepthReached => ErrorFlags::PARSE,
        }
    }
}

impl core::fmt::Display for ErrKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrKind::InvalidToken => f.write_str("invalid token"),
            ErrKind::InvalidNumber => f.write_str("invalid number"),
            ErrKind::UnterminatedString => f.write_str("unterminated string"),
            ErrKind::InvalidEscape(c) => write!(f, "invalid escape sequence \\{}", *c as char),
            ErrKind::UnicodeEscape => f.write_str("unicode escapes are not supported"),
            ErrKind::InvalidUtf8 => f.write_str("invalid UTF-8 in string"),
            ErrKind::OutOfMemory => f.write_str("memory allocation failed"),
            ErrKind::ExpectedToken(kind) => write!(f, "expected {kind}"),
            ErrKind::ExpectedString => f.write_str("expected string key"),
            ErrKind::ExpectedValue => f.write_str("expected value"),
            ErrKind::TrailingComma => f.write_str("trailing comma"),
            ErrKind::TrailingContent => f.write_str("unexpected content after value"),
            ErrKind::MaxDepthReached => f.write_str("maximum nesting depth reached"),
        }
    }
}

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrKind,
    flags: ErrorFlags,
    position: usize,
}

impl ParseError {
    pub fn new(kind: ErrKind, position: usize) -> Self {
        Self {
            kind,
            flags: kind.flag(),
            position,
        }
    }

    /// Shorthand for `Err(ParseError::new(..))`.
    pub fn err<T>(kind: ErrKind, position: usize) -> Result<T, Self> {
        Err(Self::new(kind, position))
    }

    pub(crate) fn out_of_memory(_: TryReserveError, position: usize) -> Self {
        Self::new(ErrKind::OutOfMemory, position)
    }

    /// Adds the flag of the stage the error propagates through.
    pub fn raise(mut self, flag: ErrorFlags) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    pub fn flags(&self) -> ErrorFlags {
        self.flags
    }

    /// Byte offset in the input where the failure was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {} [{}]", self.kind, self.position, self.flags)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
