//! Complex literals, such as `5`, `-2i`, `i`, or `3+4i`.
//!
//! A literal is recognized by trying each of a fixed list of rules in order. Every rule takes a
//! cursor and either returns the parsed value with the cursor moved past it, or [`None`] without
//! consuming anything; the caller simply keeps its original cursor.

use calc_compute::primitive::Complex;
use super::{token::TokenKind, Cursor};

/// A rule that recognizes one form of complex literal.
pub type LiteralRule = for<'a, 'source> fn(Cursor<'a, 'source>) -> Option<(Complex, Cursor<'a, 'source>)>;

/// Parses a literal by trying each rule in order: [`imaginary`], [`real`], then [`two_part`].
pub fn literal<'a, 'source>(cursor: Cursor<'a, 'source>) -> Option<(Complex, Cursor<'a, 'source>)> {
    let rules: [LiteralRule; 3] = [imaginary, real, two_part];
    rules.iter().find_map(|rule| rule(cursor))
}

/// Parses an optional `+` or `-`, returning the factor it stands for.
fn sign<'a, 'source>(cursor: Cursor<'a, 'source>) -> (f64, Cursor<'a, 'source>) {
    if let Some((_, next)) = cursor.eat(TokenKind::Add) {
        (1.0, next)
    } else if let Some((_, next)) = cursor.eat(TokenKind::Sub) {
        (-1.0, next)
    } else {
        (1.0, cursor)
    }
}

/// Parses a decimal number. Runs of digits and points that do not form a number are rejected.
fn number<'a, 'source>(cursor: Cursor<'a, 'source>) -> Option<(f64, Cursor<'a, 'source>)> {
    let (token, next) = cursor.eat(TokenKind::Number)?;
    let value = token.lexeme.parse().ok()?;
    Some((value, next))
}

/// `[+|-][number]i`: a purely imaginary number. The magnitude defaults to `1`, so `i` and `-i`
/// are accepted.
pub fn imaginary<'a, 'source>(cursor: Cursor<'a, 'source>) -> Option<(Complex, Cursor<'a, 'source>)> {
    let (sign, cursor) = sign(cursor);
    let (magnitude, cursor) = number(cursor).unwrap_or((1.0, cursor));
    let (_, cursor) = cursor.eat(TokenKind::I)?;
    Some((Complex::imag(sign * magnitude), cursor))
}

/// `[+|-]number`, not followed by `i`: a real number.
pub fn real<'a, 'source>(cursor: Cursor<'a, 'source>) -> Option<(Complex, Cursor<'a, 'source>)> {
    let (sign, cursor) = sign(cursor);
    let (value, cursor) = number(cursor)?;
    if cursor.peek_kind() == Some(TokenKind::I) {
        return None;
    }
    Some((Complex::real(sign * value), cursor))
}

/// `[+|-]number(+|-)[number]i`: a number with both parts written out, such as `3-4i` or `2+i`.
///
/// When tried after [`real`], this rule never matches, because [`real`] already accepts the real
/// part on its own and leaves the imaginary part to the expression grammar. The result is the
/// same either way.
pub fn two_part<'a, 'source>(cursor: Cursor<'a, 'source>) -> Option<(Complex, Cursor<'a, 'source>)> {
    let (re_sign, cursor) = sign(cursor);
    let (re, cursor) = number(cursor)?;

    let (im_sign, cursor) = match cursor.peek_kind()? {
        TokenKind::Add | TokenKind::Sub => sign(cursor),
        _ => return None,
    };
    let (im, cursor) = number(cursor).unwrap_or((1.0, cursor));
    let (_, cursor) = cursor.eat(TokenKind::I)?;

    Some((Complex::new(re_sign * re, im_sign * im), cursor))
}

#[cfg(test)]
mod tests {
    use calc_compute::primitive::complex;
    use crate::{source::Source, token::Token};
    use pretty_assertions::assert_eq;
    use super::*;

    fn tokens(source: &Source) -> Vec<Token<TokenKind>> {
        source.tokenize(TokenKind::Symbol)
    }

    /// Applies the rule to the input and returns the value, if the rule consumed all of it.
    fn apply(rule: LiteralRule, input: &str) -> Option<Complex> {
        let source = Source::strip(input);
        let tokens = tokens(&source);
        let (value, rest) = rule(Cursor::new(&tokens, input.len()))?;
        rest.is_at_end().then_some(value)
    }

    #[test]
    fn imaginary_rule() {
        assert_eq!(apply(imaginary, "3i"), Some(complex(0.0, 3.0)));
        assert_eq!(apply(imaginary, "-2i"), Some(complex(0.0, -2.0)));
        assert_eq!(apply(imaginary, "i"), Some(complex(0.0, 1.0)));
        assert_eq!(apply(imaginary, "-i"), Some(complex(0.0, -1.0)));
        assert_eq!(apply(imaginary, "3"), None);
    }

    #[test]
    fn real_rule() {
        assert_eq!(apply(real, "5"), Some(complex(5.0, 0.0)));
        assert_eq!(apply(real, "-3.25"), Some(complex(-3.25, 0.0)));
        assert_eq!(apply(real, "2i"), None);
        assert_eq!(apply(real, "1.2.3"), None);
    }

    #[test]
    fn two_part_rule() {
        assert_eq!(apply(two_part, "3+4i"), Some(complex(3.0, 4.0)));
        assert_eq!(apply(two_part, "-3-4.5i"), Some(complex(-3.0, -4.5)));
        assert_eq!(apply(two_part, "2+i"), Some(complex(2.0, 1.0)));
        assert_eq!(apply(two_part, "2+3"), None);
    }

    #[test]
    fn rule_order() {
        // `real` wins over `two_part`, leaving `+4i` unconsumed
        let source = Source::strip("3+4i");
        let tokens = tokens(&source);
        let (value, rest) = literal(Cursor::new(&tokens, 4)).unwrap();
        assert_eq!(value, complex(3.0, 0.0));
        assert_eq!(rest.peek_kind(), Some(TokenKind::Add));
    }

    #[test]
    fn no_match_consumes_nothing() {
        let source = Source::strip("+(");
        let tokens = tokens(&source);
        assert!(literal(Cursor::new(&tokens, 2)).is_none());
    }
}
