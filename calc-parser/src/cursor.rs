//! An immutable position in a stream of tokens.
//!
//! Parsing functions take a [`Cursor`] by value and return the cursor positioned after whatever
//! they consumed. Backtracking is therefore just a matter of reusing an earlier cursor; no parser
//! state is ever shared or rewound in place.

use crate::token::Token;
use std::ops::Range;

/// A position in a slice of tokens.
#[derive(Debug)]
pub struct Cursor<'a, 'source, K> {
    tokens: &'a [Token<'source, K>],
    pos: usize,
    eof: usize,
}

// manual impls: deriving would require `K: Clone`
impl<K> Clone for Cursor<'_, '_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Cursor<'_, '_, K> {}

impl<'a, 'source, K: Copy + PartialEq> Cursor<'a, 'source, K> {
    /// Creates a cursor at the start of the given tokens. `eof` is the offset of the end of the
    /// original input, used to point errors at the end of the input.
    pub fn new(tokens: &'a [Token<'source, K>], eof: usize) -> Self {
        Self { tokens, pos: 0, eof }
    }

    /// Returns the token at the cursor, if any.
    pub fn peek(self) -> Option<&'a Token<'source, K>> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the token at the cursor, if any.
    pub fn peek_kind(self) -> Option<K> {
        self.peek().map(|token| token.kind)
    }

    /// Returns the token at the cursor and a cursor advanced past it.
    pub fn next(self) -> Option<(&'a Token<'source, K>, Self)> {
        let token = self.peek()?;
        Some((token, Self { pos: self.pos + 1, ..self }))
    }

    /// Consumes the token at the cursor if it is of the given kind.
    pub fn eat(self, kind: K) -> Option<(&'a Token<'source, K>, Self)> {
        self.next().filter(|(token, _)| token.kind == kind)
    }

    /// Returns true if every token has been consumed.
    pub fn is_at_end(self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the span of the token at the cursor, or an empty span at the end of the input.
    pub fn span(self) -> Range<usize> {
        self.peek().map_or(self.eof..self.eof, |token| token.span.clone())
    }

    /// Returns the offset at which the token at the cursor starts.
    pub fn start(self) -> usize {
        self.span().start
    }

    /// Returns the offset at which the last consumed token ends.
    pub fn prev_end(self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .map_or(self.start(), |token| token.span.end)
    }
}
