//! The graphing grammar: real functions of a single variable `x`.
//!
//! ```text
//! Expression := Term (('+' | '-') Term)*
//! Term       := Unary (('*' | '/') Unary | Unary)*
//! Unary      := ('+' | '-') Unary | Power
//! Power      := Primary ('^' Unary)?
//! Primary    := Func '(' Expression ')' | '(' Expression ')' | '{' Expression '}'
//!             | Number | 'x' | 'X' | 'e'
//! ```
//!
//! Two factors written next to each other are multiplied, so `3x`, `2sin(x)` and `xe` mean
//! `3*x`, `2*sin(x)` and `x*e`. Before parsing, a `*` is also inserted wherever a digit, `x` or
//! `)` is directly followed by `(`.
//!
//! The result is a [`RealFunction`]. It stays in exact polynomial form for as long as every
//! operation allows it; see [`calc_compute::function`] for the rules.

pub mod token;

use calc_compute::function::{RealFunction, DEFAULT_MAX_EXACT_POWER};
use calc_error::Error;
use crate::{
    error::kind::{
        EmptyExpression,
        EmptyParenthesis,
        ExpectedEof,
        InvalidNumber,
        MissingArgumentList,
        UnclosedBrace,
        UnclosedParenthesis,
        UnexpectedCharacter,
        UnexpectedEof,
        UnexpectedToken,
    },
    source::Source,
};
use log::debug;
use token::TokenKind;

type Cursor<'a, 'source> = crate::cursor::Cursor<'a, 'source, TokenKind>;

/// The result of a parsing function: the compiled function, and the cursor after it.
type Parsed<'a, 'source> = Result<(RealFunction, Cursor<'a, 'source>), Error>;

/// Options that control how functions are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// The largest integer exponent that is expanded into an exact polynomial. Larger exponents
    /// are evaluated numerically instead.
    ///
    /// The default value is [`DEFAULT_MAX_EXACT_POWER`].
    pub max_exact_power: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { max_exact_power: DEFAULT_MAX_EXACT_POWER }
    }
}

impl CompileOptions {
    /// Sets the largest integer exponent that is expanded into an exact polynomial.
    pub fn max_exact_power(mut self, max_exact_power: u32) -> Self {
        self.max_exact_power = max_exact_power;
        self
    }
}

/// Compiles text into [`RealFunction`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionCompiler {
    options: CompileOptions,
}

impl FunctionCompiler {
    /// Creates a compiler with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with the given options.
    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    /// The options of this compiler.
    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Compiles a function of `x`.
    ///
    /// The spans of any error point into `input`, even where the input was preprocessed.
    pub fn parse(&self, input: &str) -> Result<RealFunction, Error> {
        let source = Source::strip(input).with_implicit_mul();
        if source.is_empty() {
            return Err(Error::new(vec![source.eof_span()], EmptyExpression));
        }

        debug!("compiling function `{}`", source.text());
        let tokens = source.tokenize(TokenKind::Symbol);
        let eof = source.eof_span();
        let (function, rest) = self.expression(Cursor::new(&tokens, eof.end))?;

        if let Some(token) = rest.peek() {
            let spans = vec![token.span.clone()];
            return Err(match token.kind {
                TokenKind::CloseParen => Error::new(spans, UnclosedParenthesis { opening: false }),
                TokenKind::CloseBrace => Error::new(spans, UnclosedBrace { opening: false }),
                TokenKind::Symbol => Error::new(spans, UnexpectedCharacter {
                    ch: token.lexeme.to_string(),
                }),
                _ => Error::new(vec![token.span.start..eof.end], ExpectedEof),
            });
        }

        match &function {
            RealFunction::Polynomial(poly) => debug!("compiled to the polynomial {}", poly),
            RealFunction::Opaque(node) => {
                debug!("compiled to an opaque function of {} nodes", node.size())
            },
        }
        Ok(function)
    }

    /// `Term (('+' | '-') Term)*`
    fn expression<'a, 'source>(&self, cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
        let (mut function, mut cursor) = self.term(cursor)?;

        loop {
            if let Some((_, next)) = cursor.eat(TokenKind::Add) {
                let (rhs, next) = self.term(next)?;
                function = function + rhs;
                cursor = next;
            } else if let Some((_, next)) = cursor.eat(TokenKind::Sub) {
                let (rhs, next) = self.term(next)?;
                function = function - rhs;
                cursor = next;
            } else {
                return Ok((function, cursor));
            }
        }
    }

    /// `Unary (('*' | '/') Unary | Unary)*`
    fn term<'a, 'source>(&self, cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
        let (mut function, mut cursor) = self.unary(cursor)?;

        loop {
            if let Some((_, next)) = cursor.eat(TokenKind::Mul) {
                let (rhs, next) = self.unary(next)?;
                function = function * rhs;
                cursor = next;
            } else if let Some((_, next)) = cursor.eat(TokenKind::Div) {
                let (rhs, next) = self.unary(next)?;
                function = function / rhs;
                cursor = next;
            } else if cursor.peek_kind().is_some_and(TokenKind::starts_primary) {
                let (rhs, next) = self.unary(cursor)?;
                function = function * rhs;
                cursor = next;
            } else {
                return Ok((function, cursor));
            }
        }
    }

    /// `('+' | '-') Unary | Power`
    fn unary<'a, 'source>(&self, cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
        if let Some((_, next)) = cursor.eat(TokenKind::Sub) {
            let (operand, next) = self.unary(next)?;
            Ok((-operand, next))
        } else if let Some((_, next)) = cursor.eat(TokenKind::Add) {
            self.unary(next)
        } else {
            self.power(cursor)
        }
    }

    /// `Primary ('^' Unary)?`
    ///
    /// The exponent is parsed as a [`Self::unary`], which itself may contain a power, making `^`
    /// right-associative.
    fn power<'a, 'source>(&self, cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
        let (base, cursor) = self.primary(cursor)?;
        match cursor.eat(TokenKind::Exp) {
            Some((_, next)) => {
                let (exponent, next) = self.unary(next)?;
                Ok((base.pow(exponent, self.options.max_exact_power), next))
            },
            None => Ok((base, cursor)),
        }
    }

    /// A function call, a group, a number, the variable, or the constant `e`.
    fn primary<'a, 'source>(&self, cursor: Cursor<'a, 'source>) -> Parsed<'a, 'source> {
        let Some((token, next)) = cursor.next() else {
            return Err(Error::new(vec![cursor.span()], UnexpectedEof));
        };
        let spans = vec![token.span.clone()];

        match token.kind {
            TokenKind::Number => match token.lexeme.parse() {
                Ok(value) => Ok((RealFunction::constant(value), next)),
                Err(_) => Err(Error::new(spans, InvalidNumber { lexeme: token.lexeme.to_string() })),
            },
            TokenKind::X => Ok((RealFunction::identity(), next)),
            TokenKind::E => Ok((RealFunction::constant(std::f64::consts::E), next)),
            TokenKind::Func(func) => {
                if next.peek_kind() != Some(TokenKind::OpenParen) {
                    return Err(Error::new(spans, MissingArgumentList {
                        name: token.lexeme.to_string(),
                    }));
                }

                let (arg, next) = self.group(next, TokenKind::CloseParen)?;
                Ok((RealFunction::call(func, arg), next))
            },
            TokenKind::OpenParen => self.group(cursor, TokenKind::CloseParen),
            TokenKind::OpenBrace => self.group(cursor, TokenKind::CloseBrace),
            TokenKind::Symbol => Err(Error::new(spans, UnexpectedCharacter {
                ch: token.lexeme.to_string(),
            })),
            _ => Err(Error::new(spans, UnexpectedToken {
                expected: "a number, `x`, `e`, a function, `(` or `{`",
                found: token.lexeme.to_string(),
            })),
        }
    }

    /// Parses an expression between the opening delimiter at the cursor and the given closing
    /// delimiter.
    fn group<'a, 'source>(&self, cursor: Cursor<'a, 'source>, close: TokenKind) -> Parsed<'a, 'source> {
        let Some((open, cursor)) = cursor.next() else {
            return Err(Error::new(vec![cursor.span()], UnexpectedEof));
        };

        if let Some((close, _)) = cursor.eat(close) {
            return Err(Error::new(vec![open.span.start..close.span.end], EmptyParenthesis));
        }

        let (function, cursor) = self.expression(cursor)?;
        if let Some((_, cursor)) = cursor.eat(close) {
            return Ok((function, cursor));
        }

        Err(match cursor.peek() {
            None if close == TokenKind::CloseBrace => {
                Error::new(vec![open.span.clone()], UnclosedBrace { opening: true })
            },
            None => Error::new(vec![open.span.clone()], UnclosedParenthesis { opening: true }),
            Some(token) => Error::new(vec![token.span.clone()], UnexpectedToken {
                expected: if close == TokenKind::CloseBrace { "`}`" } else { "`)`" },
                found: token.lexeme.to_string(),
            }),
        })
    }
}

/// Compiles a function of `x` with the default options.
pub fn parse(input: &str) -> Result<RealFunction, Error> {
    FunctionCompiler::new().parse(input)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use calc_compute::primitive::poly;
    use pretty_assertions::assert_eq;
    use std::f64::consts::{E, FRAC_PI_2};
    use super::*;

    fn compile(input: &str) -> RealFunction {
        parse(input).unwrap()
    }

    fn sample_points() -> impl Iterator<Item = f64> {
        (-20..=20).map(|i| i as f64 * 0.37)
    }

    #[test]
    fn polynomial() {
        let f = compile("x^2+3x+2");
        assert_eq!(f, RealFunction::Polynomial(poly([1.0, 3.0, 2.0])));
        assert_eq!(f.derivative().eval(1.0), 5.0);
    }

    #[test]
    fn numeric_derivative() {
        let f = compile("sin(x)");
        assert!(!f.is_polynomial());
        assert_float_absolute_eq!(f.derivative().eval(0.0), 1.0, 1e-6);
    }

    #[test]
    fn implicit_multiplication() {
        let implicit = compile("2(x+1)");
        let explicit = compile("2*(x+1)");
        assert_eq!(implicit, explicit);
        for x in sample_points() {
            assert_eq!(implicit.eval(x), explicit.eval(x));
        }

        assert_eq!(compile("x(x+1)(x-1)"), RealFunction::Polynomial(poly([1.0, 0.0, -1.0, 0.0])));
    }

    #[test]
    fn juxtaposition() {
        assert_eq!(compile("3x"), RealFunction::Polynomial(poly([3.0, 0.0])));
        assert_eq!(compile("xe"), RealFunction::Polynomial(poly([E, 0.0])));

        let f = compile("2sin(x)");
        assert!(!f.is_polynomial());
        assert_float_absolute_eq!(f.eval(FRAC_PI_2), 2.0, 1e-12);
    }

    #[test]
    fn unary_sign() {
        assert_eq!(compile("-x^2"), RealFunction::Polynomial(poly([-1.0, 0.0, 0.0])));
        assert_eq!(compile("+x--1"), RealFunction::Polynomial(poly([1.0, 1.0])));
        assert_eq!(compile("2*-x"), RealFunction::Polynomial(poly([-2.0, 0.0])));
    }

    #[test]
    fn right_associative_power() {
        let f = compile("x^3^2");
        assert_eq!(f.as_polynomial().map(|p| p.degree()), Some(9));
        assert_eq!(compile("2^3^2").eval(0.0), 512.0);
    }

    #[test]
    fn constant_exponent_is_rounded() {
        let f = compile("x^2.5");
        assert_eq!(f, RealFunction::Polynomial(poly([1.0, 0.0, 0.0, 0.0])));
        assert_eq!(f.eval(4.0), 64.0);

        assert_eq!(compile("x^1.9999999"), compile("x^2"));
        assert_eq!(compile("(x+1)^{0.5+0.6}"), compile("x+1"));
    }

    #[test]
    fn opaque_powers() {
        let f = compile("sqrt(x)^0.5");
        assert!(!f.is_polynomial());
        assert_float_absolute_eq!(f.eval(16.0), 2.0, 1e-12);

        let f = compile("2^-1");
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(0.0), 0.5);

        let f = compile("2^x");
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(3.0), 8.0);
    }

    #[test]
    fn exact_power_bound() {
        let compiler = FunctionCompiler::with_options(CompileOptions::default().max_exact_power(2));
        assert_eq!(compiler.options().max_exact_power, 2);

        let f = compiler.parse("x^3").unwrap();
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(2.0), 8.0);
        assert!(compiler.parse("x^2").unwrap().is_polynomial());
    }

    #[test]
    fn braces() {
        assert_eq!(compile("{x+1}^2"), RealFunction::Polynomial(poly([1.0, 2.0, 1.0])));
    }

    #[test]
    fn division_is_opaque() {
        let f = compile("x/2");
        assert!(!f.is_polynomial());
        assert_eq!(f.eval(4.0), 2.0);
        assert!(compile("1/x").eval(0.0).is_infinite());
    }

    #[test]
    fn builtins() {
        assert_float_absolute_eq!(compile("exp(1)").eval(0.0), E, 1e-12);
        assert_float_absolute_eq!(compile("ln(e)").eval(0.0), 1.0, 1e-12);
        assert_float_absolute_eq!(compile("lg(x)").eval(100.0), 2.0, 1e-12);
        assert_float_absolute_eq!(compile("log(x)").eval(1000.0), 3.0, 1e-12);
        assert_float_absolute_eq!(compile("arctan(1)").eval(0.0), FRAC_PI_2 / 2.0, 1e-12);
        assert_eq!(compile("sqrt(X)").eval(9.0), 3.0);
        assert!(compile("sqrt(x)").eval(-1.0).is_nan());
    }

    #[test]
    fn nested_derivative_of_polynomial_inside_function() {
        // sin is opaque, so its derivative is numeric even though its argument is polynomial
        let f = compile("sin(x^2)");
        let df = f.derivative();
        let x: f64 = 0.8;
        assert_float_absolute_eq!(df.eval(x), 2.0 * x * (x * x).cos(), 1e-6);
    }

    #[test]
    fn errors() {
        assert!(parse("  ").unwrap_err().downcast_ref::<EmptyExpression>().is_some());
        assert!(parse("()").unwrap_err().downcast_ref::<EmptyParenthesis>().is_some());

        let err = parse("sin x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<MissingArgumentList>(),
            Some(&MissingArgumentList { name: "sin".to_string() }),
        );
        assert_eq!(err.spans, vec![0..3]);

        // only known function names are lexed as names
        let err = parse("foo(x)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnexpectedCharacter>(),
            Some(&UnexpectedCharacter { ch: "f".to_string() }),
        );

        let err = parse("x + y").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnexpectedCharacter>(),
            Some(&UnexpectedCharacter { ch: "y".to_string() }),
        );
        assert_eq!(err.spans, vec![4..5]);

        let err = parse("x+").unwrap_err();
        assert!(err.downcast_ref::<UnexpectedEof>().is_some());
    }

    #[test]
    fn unbalanced_delimiters() {
        let err = parse("(x+1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnclosedParenthesis>(),
            Some(&UnclosedParenthesis { opening: true }),
        );

        let err = parse("x+1)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnclosedParenthesis>(),
            Some(&UnclosedParenthesis { opening: false }),
        );

        let err = parse("{x").unwrap_err();
        assert_eq!(err.downcast_ref::<UnclosedBrace>(), Some(&UnclosedBrace { opening: true }));

        let err = parse("x}").unwrap_err();
        assert_eq!(err.downcast_ref::<UnclosedBrace>(), Some(&UnclosedBrace { opening: false }));
    }

    #[test]
    fn spans_survive_preprocessing() {
        // `2 (x` becomes `2*(x`; the error still points at the `(` the user typed
        let err = parse("2 (x").unwrap_err();
        assert!(err.downcast_ref::<UnclosedParenthesis>().is_some());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn reparse_is_independent() {
        let a = compile("sin(x)+x^2");
        let b = compile("sin(x)+x^2");
        assert_eq!(a, b);
    }
}
