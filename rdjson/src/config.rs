// SPDX-License-Identifier: Apache-2.0

//! Runtime parser configuration.

/// Limits applied while building the value tree.
///
/// Building and dropping the tree both recurse once per nesting level, so an
/// unbounded configuration lets adversarial input such as `[[[[...` exhaust
/// the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum number of nested arrays/objects, `None` for no limit.
    pub max_depth: Option<usize>,
}

impl ParseConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub const fn new() -> Self {
        Self::with_max_depth(Self::DEFAULT_MAX_DEPTH)
    }

    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// No nesting limit; recursion depth equals document nesting depth.
    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
