//! The complex-number grammar.
//!
//! ```text
//! Expression := Term (('+' | '-') Term)*
//! Term       := Factor (('*' | '/') Factor)*
//! Factor     := 'conj' '(' Expression ')'
//!             | 'abs' '(' Expression ')'
//!             | '(' Expression ')'
//!             | Literal
//! ```
//!
//! The grammar is evaluated while it is parsed: every parsing function returns the value of what
//! it consumed, so no intermediate tree is built. See [`literal`] for the forms a literal can take.

pub mod literal;
pub mod token;

use calc_compute::{error::DivisionByZero, primitive::Complex};
use calc_error::Error;
use crate::{
    error::kind::{
        EmptyExpression,
        EmptyParenthesis,
        ExpectedEof,
        InvalidNumber,
        MissingArgumentList,
        UnclosedParenthesis,
        UnexpectedCharacter,
        UnexpectedEof,
        UnexpectedToken,
    },
    source::Source,
};
use log::{debug, trace};
use token::TokenKind;

type Cursor<'a, 'source> = crate::cursor::Cursor<'a, 'source, TokenKind>;

/// The result of a parsing function: the parsed value, and the cursor after it.
type Parsed<'a, 'source> = Result<(Complex, Cursor<'a, 'source>), Error>;

/// Parses and evaluates a complex expression.
///
/// Whitespace is ignored anywhere in the input. The spans of any error point into `input`.
pub fn parse(input: &str) -> Result<Complex, Error> {
    let source = Source::strip(input);
    if source.is_empty() {
        return Err(Error::new(vec![source.eof_span()], EmptyExpression));
    }

    debug!("parsing complex expression `{}`", source.text());
    let tokens = source.tokenize(TokenKind::Symbol);
    let eof = source.eof_span();
    let (value, rest) = expression(Cursor::new(&tokens, eof.end))?;

    match rest.peek() {
        None => {
            trace!("complex expression evaluated to {}", value);
            Ok(value)
        },
        Some(token) => Err(match token.kind {
            TokenKind::CloseParen => Error::new(
                vec![token.span.clone()],
                UnclosedParenthesis { opening: false },
            ),
            TokenKind::Symbol => Error::new(
                vec![token.span.clone()],
                UnexpectedCharacter { ch: token.lexeme.to_string() },
            ),
            _ => Error::new(vec![token.span.start..eof.end], ExpectedEof),
        }),
    }
}

/// `Term (('+' | '-') Term)*`
fn expression<'a, 'source>(cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
    let (mut value, mut cursor) = term(cursor)?;

    loop {
        if let Some((_, next)) = cursor.eat(TokenKind::Add) {
            let (rhs, next) = term(next)?;
            value = value + rhs;
            cursor = next;
        } else if let Some((_, next)) = cursor.eat(TokenKind::Sub) {
            let (rhs, next) = term(next)?;
            value = value - rhs;
            cursor = next;
        } else {
            return Ok((value, cursor));
        }
    }
}

/// `Factor (('*' | '/') Factor)*`
fn term<'a, 'source>(cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
    let (mut value, mut cursor) = factor(cursor)?;

    loop {
        if let Some((_, next)) = cursor.eat(TokenKind::Mul) {
            let (rhs, next) = factor(next)?;
            value = value * rhs;
            cursor = next;
        } else if let Some((op, next)) = cursor.eat(TokenKind::Div) {
            let (rhs, after) = factor(next)?;
            value = value.checked_div(rhs).ok_or_else(|| Error::new(
                vec![op.span.clone(), next.start()..after.prev_end()],
                DivisionByZero,
            ))?;
            cursor = after;
        } else {
            return Ok((value, cursor));
        }
    }
}

/// `'conj' '(' Expression ')' | 'abs' '(' Expression ')' | '(' Expression ')' | Literal`
fn factor<'a, 'source>(cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
    let Some(token) = cursor.peek() else {
        return Err(Error::new(vec![cursor.span()], UnexpectedEof));
    };

    match token.kind {
        TokenKind::Conj => {
            let (inner, cursor) = call(cursor)?;
            Ok((inner.conj(), cursor))
        },
        TokenKind::Abs => {
            let (inner, cursor) = call(cursor)?;
            Ok((Complex::real(inner.abs()), cursor))
        },
        TokenKind::OpenParen => paren(cursor),
        _ => literal::literal(cursor).ok_or_else(|| {
            let spans = vec![token.span.clone()];
            match token.kind {
                TokenKind::Number => Error::new(spans, InvalidNumber {
                    lexeme: token.lexeme.to_string(),
                }),
                TokenKind::Symbol => Error::new(spans, UnexpectedCharacter {
                    ch: token.lexeme.to_string(),
                }),
                _ => Error::new(spans, UnexpectedToken {
                    expected: "a number, `(`, `conj` or `abs`",
                    found: token.lexeme.to_string(),
                }),
            }
        }),
    }
}

/// Parses a function name followed by its parenthesized argument, returning the argument.
fn call<'a, 'source>(cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
    let Some((name, next)) = cursor.next() else {
        return Err(Error::new(vec![cursor.span()], UnexpectedEof));
    };

    if next.peek_kind() != Some(TokenKind::OpenParen) {
        return Err(Error::new(vec![name.span.clone()], MissingArgumentList {
            name: name.lexeme.to_string(),
        }));
    }

    paren(next)
}

/// `'(' Expression ')'`
fn paren<'a, 'source>(cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
    let Some((open, cursor)) = cursor.eat(TokenKind::OpenParen) else {
        return Err(Error::new(vec![cursor.span()], UnexpectedToken {
            expected: "`(`",
            found: cursor.peek().map_or(String::new(), |token| token.lexeme.to_string()),
        }));
    };

    if let Some((close, _)) = cursor.eat(TokenKind::CloseParen) {
        return Err(Error::new(vec![open.span.start..close.span.end], EmptyParenthesis));
    }

    let (value, cursor) = expression(cursor)?;
    match cursor.eat(TokenKind::CloseParen) {
        Some((_, cursor)) => Ok((value, cursor)),
        None => match cursor.peek() {
            None => Err(Error::new(vec![open.span.clone()], UnclosedParenthesis { opening: true })),
            Some(token) => Err(Error::new(vec![token.span.clone()], UnexpectedToken {
                expected: "`)`",
                found: token.lexeme.to_string(),
            })),
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use calc_compute::primitive::complex;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval(input: &str) -> Complex {
        parse(input).unwrap()
    }

    #[test]
    fn literals() {
        assert_eq!(eval("3+4i"), complex(3.0, 4.0));
        assert_eq!(eval("-2i"), complex(0.0, -2.0));
        assert_eq!(eval("5"), complex(5.0, 0.0));
        assert_eq!(eval("i"), complex(0.0, 1.0));
        assert_eq!(eval("-i"), complex(0.0, -1.0));
        assert_eq!(eval("3 - 4 i"), complex(3.0, -4.0));
    }

    #[test]
    fn functions() {
        assert_eq!(eval("conj(3+4i)"), complex(3.0, -4.0));
        assert_eq!(eval("abs(3+4i)"), complex(5.0, 0.0));
        assert_eq!(eval("abs(conj(-3i))*2"), complex(6.0, 0.0));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("(1+2i)*(3-i)"), complex(5.0, 5.0));
        assert_eq!(eval("2*3-4i"), complex(6.0, -4.0));
        assert_eq!(eval("2+3*i"), complex(2.0, 3.0));
        assert_eq!(eval("i*i"), complex(-1.0, 0.0));
        assert_eq!(eval("2*-3"), complex(-6.0, 0.0));

        let q = eval("(11-2i)/(1-2i)");
        assert_float_absolute_eq!(q.re(), 3.0, 1e-12);
        assert_float_absolute_eq!(q.im(), 4.0, 1e-12);
    }

    #[test]
    fn division_by_zero() {
        let err = parse("1/0").unwrap_err();
        assert!(err.is_arithmetic());
        assert_eq!(err.spans, vec![1..2, 2..3]);

        let err = parse("(1+i) / (i-i)").unwrap_err();
        assert!(err.is_arithmetic());
        assert_eq!(err.spans, vec![6..7, 8..13]);
    }

    #[test]
    fn canonical_form_round_trip() {
        for z in [
            complex(3.0, 4.0),
            complex(3.0, -4.0),
            complex(0.0, -2.0),
            complex(-1.25, 0.5),
            complex(7.0, 0.0),
            complex(-0.125, -10.0),
        ] {
            let reparsed = eval(&z.to_string());
            assert!(reparsed.approx_eq(z, 5e-4), "{} reparsed as {}", z, reparsed);
        }
    }

    #[test]
    fn empty() {
        assert!(parse(" ").unwrap_err().downcast_ref::<EmptyExpression>().is_some());
        assert!(parse("()").unwrap_err().downcast_ref::<EmptyParenthesis>().is_some());
    }

    #[test]
    fn unbalanced_parentheses() {
        let err = parse("(1+2").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnclosedParenthesis>(),
            Some(&UnclosedParenthesis { opening: true }),
        );
        assert_eq!(err.spans, vec![0..1]);

        let err = parse("1+2)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnclosedParenthesis>(),
            Some(&UnclosedParenthesis { opening: false }),
        );
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn unexpected_input() {
        let err = parse("3+").unwrap_err();
        assert!(err.downcast_ref::<UnexpectedEof>().is_some());
        assert_eq!(err.spans, vec![2..2]);

        let err = parse("3+*2").unwrap_err();
        assert!(err.downcast_ref::<UnexpectedToken>().is_some());

        let err = parse("3x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnexpectedCharacter>(),
            Some(&UnexpectedCharacter { ch: "x".to_string() }),
        );

        let err = parse("(1)(2)").unwrap_err();
        assert!(err.downcast_ref::<ExpectedEof>().is_some());
        assert_eq!(err.spans, vec![3..6]);

        let err = parse("1.2.3").unwrap_err();
        assert!(err.downcast_ref::<InvalidNumber>().is_some());
    }

    #[test]
    fn missing_argument_list() {
        let err = parse("conj 3").unwrap_err();
        assert_eq!(
            err.downcast_ref::<MissingArgumentList>(),
            Some(&MissingArgumentList { name: "conj".to_string() }),
        );
        assert_eq!(err.spans, vec![0..4]);
    }
}
