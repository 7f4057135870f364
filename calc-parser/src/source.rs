//! Preprocessing of the raw input text.
//!
//! Every grammar first removes all whitespace from its input, so that `1 2` reads as `12` and
//! `s in(x)` reads as `sin(x)`. The graphing grammar additionally inserts explicit
//! multiplication operators (see [`Source::with_implicit_mul`]). To keep error messages pointing
//! at the text the user actually typed, [`Source`] remembers where each byte of the processed
//! text came from.

use crate::token::Token;
use logos::Logos;
use std::ops::Range;

/// Preprocessed input text, together with a map back into the original input.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// The processed text.
    text: String,

    /// For every byte of `text`, the index of the corresponding byte in the original input. The
    /// last element is the length of the original input.
    offsets: Vec<usize>,
}

impl Source {
    /// Removes all whitespace from the input.
    pub fn strip(input: &str) -> Self {
        let mut text = String::with_capacity(input.len());
        let mut offsets = Vec::with_capacity(input.len() + 1);

        for (idx, c) in input.char_indices() {
            if c.is_whitespace() {
                continue;
            }

            text.push(c);
            offsets.extend(idx..idx + c.len_utf8());
        }
        offsets.push(input.len());

        Self { text, offsets }
    }

    /// Inserts a `*` wherever a digit, `x` / `X`, or `)` is immediately followed by `(`, turning
    /// `2x(x+1)` into `2x*(x+1)`. The inserted operator maps back to the position of the `(`.
    pub fn with_implicit_mul(self) -> Self {
        let mut text = String::with_capacity(self.text.len());
        let mut offsets = Vec::with_capacity(self.offsets.len());
        let mut prev = None;

        for (idx, c) in self.text.char_indices() {
            if c == '(' && matches!(prev, Some('0'..='9' | 'x' | 'X' | ')')) {
                text.push('*');
                offsets.push(self.offsets[idx]);
            }

            text.push(c);
            offsets.extend_from_slice(&self.offsets[idx..idx + c.len_utf8()]);
            prev = Some(c);
        }
        offsets.push(self.offsets[self.text.len()]);

        Self { text, offsets }
    }

    /// The processed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the processed text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Maps a span of the processed text to the corresponding span of the original input.
    pub fn original_span(&self, span: Range<usize>) -> Range<usize> {
        let start = self.offsets[span.start];
        if span.end <= span.start {
            return start..start;
        }

        // the last byte of the span is always the last byte of a character, which is not
        // separated from its preceding bytes in the original input
        start..self.offsets[span.end - 1] + 1
    }

    /// Returns an empty span pointing at the end of the original input.
    pub fn eof_span(&self) -> Range<usize> {
        let end = self.offsets[self.text.len()];
        end..end
    }

    /// Tokenizes the processed text with the token kind `K`. Input that the lexer does not
    /// recognize produces tokens of the `unknown` kind. The span of each token points into the
    /// original input.
    pub fn tokenize<'source, K>(&'source self, unknown: K) -> Vec<Token<'source, K>>
    where
        K: Logos<'source, Source = str> + Copy,
        K::Extras: Default,
    {
        let mut lexer = K::lexer(&self.text);
        let mut tokens = Vec::new();

        while let Some(result) = lexer.next() {
            tokens.push(Token {
                kind: result.unwrap_or(unknown),
                span: self.original_span(lexer.span()),
                lexeme: lexer.slice(),
            });
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn strip_whitespace() {
        let source = Source::strip(" 3 +\t4 * ( 2-1 ) ");
        assert_eq!(source.text(), "3+4*(2-1)");

        // `4` is at index 5 of the input and index 2 of the processed text
        assert_eq!(source.original_span(2..3), 5..6);
        // `(2-1)` spans the inner whitespace in the original input
        assert_eq!(source.original_span(4..9), 9..16);
        assert_eq!(source.eof_span(), 17..17);
    }

    #[test]
    fn strip_multibyte() {
        let source = Source::strip("√ 4");
        assert_eq!(source.text(), "√4");
        assert_eq!(source.original_span(0..3), 0..3);
        assert_eq!(source.original_span(3..4), 4..5);
    }

    #[test]
    fn implicit_mul() {
        let source = Source::strip("2x (x+1)(x-1)").with_implicit_mul();
        assert_eq!(source.text(), "2x*(x+1)*(x-1)");

        // the inserted `*` points at the `(` it precedes
        assert_eq!(source.original_span(2..3), 3..4);
        assert_eq!(source.original_span(3..4), 3..4);
        assert_eq!(source.eof_span(), 13..13);
    }

    #[test]
    fn implicit_mul_skips_function_names() {
        let source = Source::strip("sin(x)+3(x)").with_implicit_mul();
        assert_eq!(source.text(), "sin(x)+3*(x)");
    }

    #[test]
    fn empty() {
        let source = Source::strip("   ");
        assert!(source.is_empty());
        assert_eq!(source.eof_span(), 3..3);
    }
}
